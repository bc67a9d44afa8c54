//! Almacén genérico de registros en memoria
//!
//! Este módulo implementa la "lista de registros etiquetados" compartida por
//! las cuatro entidades (vehículos, facturas, inventario, pagos): una
//! colección ordenada en memoria, sembrada con fixtures al arrancar, con
//! búsqueda por subcadena y mutación por reemplazo completo del registro.
//!
//! Invariantes:
//! - el id es único dentro de la colección
//! - el filtrado preserva el orden relativo original
//! - toda mutación ocurre bajo el write-lock, sin visibilidad parcial

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Registro gestionable por el almacén genérico
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;

    /// Campos (en su forma de texto) contra los que corre el buscador,
    /// en el mismo orden que la tabla del listado
    fn search_fields(&self) -> Vec<String>;
}

static ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generar un id derivado de timestamp con prefijo de entidad.
/// El sufijo secuencial evita colisiones entre creaciones dentro
/// del mismo milisegundo.
pub fn next_record_id(prefix: &str) -> String {
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed) % 1000;
    format!("{}{}{:03}", prefix, chrono::Utc::now().timestamp_millis(), seq)
}

/// Colección ordenada de registros de una entidad
#[derive(Debug)]
pub struct RecordStore<T: Record> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(seed)),
        }
    }

    /// Vista filtrada: registros con al menos un campo que contenga la
    /// consulta como subcadena (case-insensitive). Consulta vacía devuelve
    /// la colección completa.
    pub async fn filter(&self, query: &str) -> Vec<T> {
        let needle = query.trim().to_lowercase();
        let records = self.records.read().await;
        if needle.is_empty() {
            return records.clone();
        }
        records
            .iter()
            .filter(|record| {
                record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: &str) -> Option<T> {
        let records = self.records.read().await;
        records.iter().find(|r| r.id() == id).cloned()
    }

    /// Insertar al principio de la colección (el listado muestra primero
    /// lo recién creado)
    pub async fn insert_first(&self, record: T) {
        let mut records = self.records.write().await;
        records.insert(0, record);
    }

    /// Reemplazo completo por id; devuelve el registro nuevo si el id existía
    pub async fn replace(&self, id: &str, record: T) -> Option<T> {
        let mut records = self.records.write().await;
        let position = records.iter().position(|r| r.id() == id)?;
        records[position] = record.clone();
        Some(record)
    }

    /// Eliminar por id; devuelve el registro eliminado si existía
    pub async fn remove(&self, id: &str) -> Option<T> {
        let mut records = self.records.write().await;
        let position = records.iter().position(|r| r.id() == id)?;
        Some(records.remove(position))
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Part {
        id: String,
        name: String,
        bin: String,
    }

    impl Record for Part {
        fn id(&self) -> &str {
            &self.id
        }

        fn search_fields(&self) -> Vec<String> {
            vec![self.id.clone(), self.name.clone(), self.bin.clone()]
        }
    }

    fn part(id: &str, name: &str, bin: &str) -> Part {
        Part {
            id: id.to_string(),
            name: name.to_string(),
            bin: bin.to_string(),
        }
    }

    fn seed() -> Vec<Part> {
        vec![
            part("P1", "Oil Filter", "A1"),
            part("P2", "Brake Pads", "B3"),
            part("P3", "Air Filter", "A1"),
            part("P4", "Coolant", "C2"),
        ]
    }

    #[tokio::test]
    async fn empty_query_returns_everything_in_order() {
        let store = RecordStore::new(seed());
        let filtered = store.filter("").await;
        assert_eq!(filtered, seed());
    }

    #[tokio::test]
    async fn filter_is_case_insensitive_substring_and_preserves_order() {
        let store = RecordStore::new(seed());
        let filtered = store.filter("fIlTeR").await;
        assert_eq!(
            filtered.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["P1", "P3"]
        );
    }

    #[tokio::test]
    async fn filter_result_is_subset_of_collection() {
        let store = RecordStore::new(seed());
        let all = store.all().await;
        for query in ["a1", "brake", "zzz", ""] {
            for record in store.filter(query).await {
                assert!(all.contains(&record));
            }
        }
    }

    #[tokio::test]
    async fn insert_first_prepends() {
        let store = RecordStore::new(seed());
        store.insert_first(part("P5", "Wiper Blades", "D2")).await;
        let all = store.all().await;
        assert_eq!(all[0].id, "P5");
        assert_eq!(all.len(), 5);
    }

    #[tokio::test]
    async fn replace_swaps_exactly_one_record() {
        let store = RecordStore::new(seed());
        let replaced = store.replace("P2", part("P2", "Ceramic Brake Pads", "B4")).await;
        assert!(replaced.is_some());

        let all = store.all().await;
        assert_eq!(all.len(), 4);
        assert_eq!(all[1].name, "Ceramic Brake Pads");
        assert_eq!(all[0], part("P1", "Oil Filter", "A1"));
        assert_eq!(all[2], part("P3", "Air Filter", "A1"));
    }

    #[tokio::test]
    async fn replace_unknown_id_is_a_noop() {
        let store = RecordStore::new(seed());
        assert!(store.replace("P99", part("P99", "Ghost", "Z9")).await.is_none());
        assert_eq!(store.all().await, seed());
    }

    #[tokio::test]
    async fn remove_by_id() {
        let store = RecordStore::new(seed());
        let removed = store.remove("P3").await.unwrap();
        assert_eq!(removed.name, "Air Filter");
        assert_eq!(store.len().await, 3);
        assert!(store.get("P3").await.is_none());
    }

    #[test]
    fn generated_ids_are_unique_and_prefixed() {
        let mut ids: Vec<String> = (0..50).map(|_| next_record_id("INV")).collect();
        assert!(ids.iter().all(|id| id.starts_with("INV")));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }
}
