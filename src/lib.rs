// src/lib.rs
// La lógica vive en la librería para que los tests de integración
// puedan usar los servicios directamente; el binario solo arranca el servidor.

pub mod db;
pub mod error;
pub mod horario;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
