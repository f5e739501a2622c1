//! Cache
//!
//! Este módulo contiene la cache de colecciones que respalda las vistas
//! de listado del panel de administración.

pub mod collection_cache;

pub use collection_cache::CollectionCache;
