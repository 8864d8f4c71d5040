// src/horario/esquema.rs
use crate::models::configuracion::{semana_completa, EsquemaTipo, JornadaDto};

pub const MAX_JORNADAS: usize = 5;
pub const MIN_JORNADAS: usize = 1;

// Paleta fija, asignada en round-robin según la posición de la jornada
const COLORES: [&str; 5] = ["#4CAF50", "#2196F3", "#FF9800", "#9C27B0", "#F44336"];

fn codigo_por_posicion(posicion: usize) -> String {
    // A..Z por posición; con el tope de 5 jornadas nunca se agota
    char::from(b'A' + (posicion % 26) as u8).to_string()
}

pub fn color_por_posicion(posicion: usize) -> &'static str {
    COLORES[posicion % COLORES.len()]
}

/// Regenera `codigo` (A, B, C...) y `orden` (1, 2, 3...) por posición.
/// Renumeración completa: no se preservan huecos tras quitar o reordenar.
pub fn reenumerar(jornadas: &mut [JornadaDto]) {
    for (i, jornada) in jornadas.iter_mut().enumerate() {
        jornada.codigo = codigo_por_posicion(i);
        jornada.orden = (i + 1) as i64;
    }
}

/// Añade una jornada al final: siguiente letra, color de la paleta y franja
/// por defecto de 12:00 AM a 08:00 AM. Con 5 jornadas se rechaza sin mutar.
pub fn agregar_jornada(jornadas: &mut Vec<JornadaDto>) -> Result<(), String> {
    if jornadas.len() >= MAX_JORNADAS {
        return Err(format!(
            "No se pueden crear más de {} jornadas",
            MAX_JORNADAS
        ));
    }
    let posicion = jornadas.len();
    let codigo = codigo_por_posicion(posicion);
    jornadas.push(JornadaDto {
        id: None,
        nombre: format!("Jornada {}", codigo),
        codigo,
        descripcion: String::new(),
        hora_inicio: "00:00".to_string(),
        hora_fin: "08:00".to_string(),
        activa: true,
        dias_semana: semana_completa(),
        color: color_por_posicion(posicion).to_string(),
        orden: (posicion + 1) as i64,
    });
    Ok(())
}

/// Quita la jornada en `indice` y renumera el resto.
/// Siempre debe quedar al menos una jornada.
pub fn quitar_jornada(jornadas: &mut Vec<JornadaDto>, indice: usize) -> Result<(), String> {
    if jornadas.len() <= MIN_JORNADAS {
        return Err("Debe existir al menos una jornada".to_string());
    }
    if indice >= jornadas.len() {
        return Err("La jornada indicada no existe".to_string());
    }
    jornadas.remove(indice);
    reenumerar(jornadas);
    Ok(())
}

fn jornada_plantilla(posicion: usize, nombre: &str, inicio: &str, fin: &str) -> JornadaDto {
    JornadaDto {
        id: None,
        codigo: codigo_por_posicion(posicion),
        nombre: nombre.to_string(),
        descripcion: String::new(),
        hora_inicio: inicio.to_string(),
        hora_fin: fin.to_string(),
        activa: true,
        dias_semana: semana_completa(),
        color: color_por_posicion(posicion).to_string(),
        orden: (posicion + 1) as i64,
    }
}

/// Lista de jornadas de un esquema predefinido. Aplicarlo reemplaza la lista
/// entera; "personalizado" devuelve None y la lista actual se conserva.
pub fn plantilla(tipo: EsquemaTipo) -> Option<Vec<JornadaDto>> {
    match tipo {
        EsquemaTipo::Una => Some(vec![jornada_plantilla(
            0,
            "Jornada completa",
            "00:00",
            "23:59",
        )]),
        // TODO: falta definir la tercera franja del esquema "tres";
        // de momento genera las mismas dos que "dos".
        EsquemaTipo::Dos | EsquemaTipo::Tres => Some(vec![
            jornada_plantilla(0, "Mañana", "07:00", "12:00"),
            jornada_plantilla(1, "Tarde", "15:00", "21:00"),
        ]),
        EsquemaTipo::Personalizado => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lista_de(n: usize) -> Vec<JornadaDto> {
        let mut jornadas = Vec::new();
        for _ in 0..n {
            agregar_jornada(&mut jornadas).expect("por debajo del límite");
        }
        jornadas
    }

    #[test]
    fn agregar_asigna_codigo_color_y_franja_por_defecto() {
        let mut jornadas = lista_de(2);
        assert_eq!(jornadas[0].codigo, "A");
        assert_eq!(jornadas[1].codigo, "B");
        assert_eq!(jornadas[1].hora_inicio, "00:00");
        assert_eq!(jornadas[1].hora_fin, "08:00");
        assert_eq!(jornadas[1].orden, 2);
        assert_ne!(jornadas[0].color, jornadas[1].color);

        agregar_jornada(&mut jornadas).unwrap();
        assert_eq!(jornadas[2].codigo, "C");
    }

    #[test]
    fn la_sexta_jornada_se_rechaza_sin_mutar() {
        let mut jornadas = lista_de(5);
        let antes = jornadas.clone();

        let resultado = agregar_jornada(&mut jornadas);

        assert!(resultado.is_err());
        assert_eq!(jornadas, antes);
    }

    #[test]
    fn quitar_renumera_por_posicion() {
        let mut jornadas = lista_de(3);
        // Nombres propios para comprobar qué fila sobrevive
        jornadas[0].nombre = "primera".into();
        jornadas[1].nombre = "segunda".into();
        jornadas[2].nombre = "tercera".into();

        quitar_jornada(&mut jornadas, 1).unwrap();

        assert_eq!(jornadas.len(), 2);
        assert_eq!(jornadas[0].nombre, "primera");
        assert_eq!(jornadas[1].nombre, "tercera");
        // Renumeración completa, sin huecos
        assert_eq!(jornadas[0].codigo, "A");
        assert_eq!(jornadas[1].codigo, "B");
        assert_eq!(jornadas[0].orden, 1);
        assert_eq!(jornadas[1].orden, 2);
    }

    #[test]
    fn quitar_la_ultima_se_rechaza() {
        let mut jornadas = lista_de(1);
        let antes = jornadas.clone();

        assert!(quitar_jornada(&mut jornadas, 0).is_err());
        assert_eq!(jornadas, antes);
    }

    #[test]
    fn quitar_indice_inexistente_se_rechaza() {
        let mut jornadas = lista_de(2);
        assert!(quitar_jornada(&mut jornadas, 7).is_err());
        assert_eq!(jornadas.len(), 2);
    }

    #[test]
    fn plantilla_una_cubre_el_dia() {
        let jornadas = plantilla(EsquemaTipo::Una).unwrap();
        assert_eq!(jornadas.len(), 1);
        assert_eq!(jornadas[0].hora_inicio, "00:00");
        assert_eq!(jornadas[0].hora_fin, "23:59");
    }

    #[test]
    fn plantilla_dos_tiene_manana_y_tarde() {
        let jornadas = plantilla(EsquemaTipo::Dos).unwrap();
        assert_eq!(jornadas.len(), 2);
        assert_eq!(jornadas[0].hora_inicio, "07:00");
        assert_eq!(jornadas[0].hora_fin, "12:00");
        assert_eq!(jornadas[1].hora_inicio, "15:00");
        assert_eq!(jornadas[1].hora_fin, "21:00");
    }

    #[test]
    fn plantilla_tres_sigue_igual_que_dos() {
        assert_eq!(
            plantilla(EsquemaTipo::Tres),
            plantilla(EsquemaTipo::Dos)
        );
    }

    #[test]
    fn personalizado_no_impone_plantilla() {
        assert!(plantilla(EsquemaTipo::Personalizado).is_none());
    }
}
