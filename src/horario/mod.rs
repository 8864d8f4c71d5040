// src/horario/mod.rs
// Lógica pura de horarios: conversión 12h/24h, detección de solapes entre
// jornadas y operaciones estructurales sobre la lista de jornadas.
// Sin I/O: todo es síncrono y funciona sobre listas pequeñas en memoria.

pub mod conflicto;
pub mod esquema;
pub mod hora;
