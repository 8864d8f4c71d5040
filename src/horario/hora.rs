// src/horario/hora.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Periodo {
    AM,
    PM,
}

impl Periodo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodo::AM => "AM",
            Periodo::PM => "PM",
        }
    }
}

/// Hora en formato de 12 horas, tal y como se edita en los formularios.
/// Representación efímera: lo que se persiste es siempre "HH:MM" en 24h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hora12 {
    pub hora: u32,   // 1..=12
    pub minuto: u32, // 0..=59
    pub periodo: Periodo,
}

fn parsear_24h(hora24: &str) -> Option<(u32, u32)> {
    let (hh, mm) = hora24.split_once(':')?;
    let h: u32 = hh.trim().parse().ok()?;
    let m: u32 = mm.trim().parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some((h, m))
}

/// Convierte "HH:MM" (24h) a 12 horas: periodo PM a partir de las 12,
/// y la hora 0 pasa a ser 12 AM.
/// No falla nunca: una entrada malformada degrada a 12:00 AM y se loguea.
pub fn a_12_horas(hora24: &str) -> Hora12 {
    match parsear_24h(hora24) {
        Some((h, m)) => {
            let periodo = if h >= 12 { Periodo::PM } else { Periodo::AM };
            let hora = match h % 12 {
                0 => 12,
                x => x,
            };
            Hora12 {
                hora,
                minuto: m,
                periodo,
            }
        }
        None => {
            tracing::warn!("Hora 24h inválida '{}', se usa 12:00 AM", hora24);
            Hora12 {
                hora: 12,
                minuto: 0,
                periodo: Periodo::AM,
            }
        }
    }
}

pub fn es_valida_12h(hora: &Hora12) -> bool {
    (1..=12).contains(&hora.hora) && hora.minuto <= 59
}

/// Inversa de `a_12_horas`: 12 AM pasa a hora 0, PM suma 12 salvo a las 12.
/// Salida con cero inicial ("07:05"). Entrada inválida degrada a "00:00".
pub fn a_24_horas(hora: &Hora12) -> String {
    if !es_valida_12h(hora) {
        tracing::warn!("Hora 12h inválida {:?}, se usa 00:00", hora);
        return "00:00".to_string();
    }
    let h24 = match (hora.periodo, hora.hora) {
        (Periodo::AM, 12) => 0,
        (Periodo::PM, h) if h != 12 => h + 12,
        (_, h) => h,
    };
    format!("{:02}:{:02}", h24, hora.minuto)
}

/// Minutos desde medianoche de un "HH:MM", en [0, 1439].
/// Solo se usa para comparar; malformado degrada a 0.
pub fn minutos_desde_medianoche(hora24: &str) -> i64 {
    match parsear_24h(hora24) {
        Some((h, m)) => i64::from(h) * 60 + i64::from(m),
        None => {
            tracing::warn!("Hora 24h inválida '{}', se usan 0 minutos", hora24);
            0
        }
    }
}

/// Etiqueta legible en 12h: "7:00 AM" (hora sin cero inicial, minuto con dos).
pub fn formato_12h(hora24: &str) -> String {
    let h = a_12_horas(hora24);
    format!("{}:{:02} {}", h.hora, h.minuto, h.periodo.as_str())
}

pub fn minutos_a_formato_12h(minutos: i64) -> String {
    formato_12h(&format!("{:02}:{:02}", minutos / 60, minutos % 60))
}
