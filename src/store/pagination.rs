//! Paginación de la vista filtrada
//!
//! Ventanas de página de tamaño fijo sobre la vista filtrada. La página
//! solicitada se recorta a [1, total_pages] para que nunca se sirva una
//! página fuera de rango tras un borrado, salvo colección vacía (que
//! devuelve la página 1 vacía).

use serde::Serialize;

/// Página servida al cliente
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Número total de páginas para un conteo y tamaño dados
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

/// Recortar la página solicitada al rango válido
pub fn clamp_page(requested: usize, count: usize, page_size: usize) -> usize {
    requested.clamp(1, total_pages(count, page_size).max(1))
}

/// Cortar la ventana de la página actual sobre la vista filtrada
pub fn paginate<T: Clone>(filtered: &[T], requested_page: usize, page_size: usize) -> Paged<T> {
    let total_count = filtered.len();
    let pages = total_pages(total_count, page_size);
    let page = clamp_page(requested_page, total_count, page_size);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_count);
    let items = if start < total_count {
        filtered[start..end].to_vec()
    } else {
        Vec::new()
    };

    Paged {
        items,
        page,
        page_size,
        total_pages: pages,
        total_count,
    }
}
