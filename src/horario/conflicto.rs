// src/horario/conflicto.rs
use serde::Serialize;

use crate::horario::hora;
use crate::models::configuracion::JornadaDto;

const MINUTOS_DIA: i64 = 24 * 60;

/// Informe de solape entre jornadas. Derivado: se recalcula en cada cambio
/// de la lista y no se persiste nunca.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteConflicto {
    pub hay_conflicto: bool,
    pub mensaje: String,
    pub jornadas_conflicto: Vec<String>,
    pub espacios_disponibles: Vec<String>,
}

fn rango_12h(jornada: &JornadaDto) -> String {
    format!(
        "{} - {}",
        hora::formato_12h(&jornada.hora_inicio),
        hora::formato_12h(&jornada.hora_fin)
    )
}

/// Busca solapes en la lista completa de jornadas de una configuración.
///
/// Los intervalos son semiabiertos [inicio, fin): que una jornada termine
/// exactamente cuando empieza otra NO cuenta como solape.
///
/// Gana el primer conflicto: la primera jornada (en orden de lista) que
/// solapa con alguna otra se convierte en protagonista del informe y la
/// función retorna ahí mismo, sin seguir buscando conflictos independientes
/// entre las jornadas restantes. Sin solapes, devuelve None.
pub fn detectar_conflicto(jornadas: &[JornadaDto]) -> Option<ReporteConflicto> {
    for (i, jornada) in jornadas.iter().enumerate() {
        let inicio_i = hora::minutos_desde_medianoche(&jornada.hora_inicio);
        let fin_i = hora::minutos_desde_medianoche(&jornada.hora_fin);

        let solapadas: Vec<&JornadaDto> = jornadas
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .filter(|(_, otra)| {
                let inicio_j = hora::minutos_desde_medianoche(&otra.hora_inicio);
                let fin_j = hora::minutos_desde_medianoche(&otra.hora_fin);
                inicio_i < fin_j && fin_i > inicio_j
            })
            .map(|(_, otra)| otra)
            .collect();

        if !solapadas.is_empty() {
            let detalle = solapadas
                .iter()
                .map(|otra| format!("\"{}\" ({})", otra.nombre, rango_12h(otra)))
                .collect::<Vec<_>>()
                .join(", ");

            return Some(ReporteConflicto {
                hay_conflicto: true,
                mensaje: format!(
                    "La jornada \"{}\" ({}) se solapa con: {}",
                    jornada.nombre,
                    rango_12h(jornada),
                    detalle
                ),
                jornadas_conflicto: solapadas.iter().map(|otra| otra.nombre.clone()).collect(),
                espacios_disponibles: espacios_disponibles(jornadas, Some(i)),
            });
        }
    }
    None
}

/// Huecos libres del día dadas las jornadas, excluyendo opcionalmente una
/// (la protagonista de un conflicto, para sugerir a dónde moverla).
///
/// Las jornadas restantes se ordenan por hora de inicio y se recorren en
/// secuencia: hueco inicial desde las 12:00 AM, huecos entre consecutivas
/// cuando `inicio(k+1) > fin(k)`, y hueco final hasta las 11:59 PM.
pub fn espacios_disponibles(jornadas: &[JornadaDto], excluir: Option<usize>) -> Vec<String> {
    let mut intervalos: Vec<(i64, i64)> = jornadas
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != excluir)
        .map(|(_, j)| {
            (
                hora::minutos_desde_medianoche(&j.hora_inicio),
                hora::minutos_desde_medianoche(&j.hora_fin),
            )
        })
        .collect();
    intervalos.sort_by_key(|(inicio, _)| *inicio);

    let mut espacios = Vec::new();

    let Some(&(primer_inicio, _)) = intervalos.first() else {
        // Sin jornadas restantes el día entero queda libre
        espacios.push("12:00 AM - 11:59 PM".to_string());
        return espacios;
    };

    if primer_inicio > 0 {
        espacios.push(format!(
            "12:00 AM - {}",
            hora::minutos_a_formato_12h(primer_inicio)
        ));
    }

    for par in intervalos.windows(2) {
        let (_, fin_a) = par[0];
        let (inicio_b, _) = par[1];
        if inicio_b > fin_a {
            espacios.push(format!(
                "{} - {}",
                hora::minutos_a_formato_12h(fin_a),
                hora::minutos_a_formato_12h(inicio_b)
            ));
        }
    }

    if let Some(&(_, ultimo_fin)) = intervalos.last() {
        if ultimo_fin < MINUTOS_DIA {
            espacios.push(format!(
                "{} - 11:59 PM",
                hora::minutos_a_formato_12h(ultimo_fin)
            ));
        }
    }

    espacios
}
