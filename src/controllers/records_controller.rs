//! Controller genérico de registros
//!
//! Un único controller parametrizado por la forma del registro cubre las
//! cuatro entidades: listar (filtro + página), consultar, crear, editar
//! por reemplazo completo y eliminar. Cada módulo de rutas lo instancia
//! con su colección, nombre de recurso y tamaño de página.

use crate::dto::common::ListQuery;
use crate::store::pagination::{paginate, Paged};
use crate::store::record_store::{Record, RecordStore};
use crate::utils::errors::{not_found_error, AppResult};

pub struct RecordsController<T: Record> {
    store: RecordStore<T>,
    resource: &'static str,
    page_size: usize,
}

impl<T: Record> RecordsController<T> {
    pub fn new(store: RecordStore<T>, resource: &'static str, page_size: usize) -> Self {
        Self {
            store,
            resource,
            page_size,
        }
    }

    /// Página actual de la vista filtrada
    pub async fn list(&self, query: &ListQuery) -> Paged<T> {
        let filtered = self.store.filter(query.query()).await;
        paginate(&filtered, query.page(), self.page_size)
    }

    pub async fn get(&self, id: &str) -> AppResult<T> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| not_found_error(self.resource, id))
    }

    /// Alta: el registro ya validado se antepone a la colección
    pub async fn create(&self, record: T) -> T {
        self.store.insert_first(record.clone()).await;
        record
    }

    /// Edición: reemplazo completo del registro con ese id
    pub async fn update(&self, id: &str, record: T) -> AppResult<T> {
        self.store
            .replace(id, record)
            .await
            .ok_or_else(|| not_found_error(self.resource, id))
    }

    pub async fn delete(&self, id: &str) -> AppResult<T> {
        self.store
            .remove(id)
            .await
            .ok_or_else(|| not_found_error(self.resource, id))
    }
}
