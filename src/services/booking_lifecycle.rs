//! Ciclo de vida de estados de las reservas
//!
//! Transiciones administrativas de estado y de pago. El cliente no
//! impone matriz de transiciones: cualquier estado puede pedirse desde
//! cualquier otro y el backend es la única autoridad sobre su legalidad.
//! Tras una escritura exitosa se invalida la cache del listado para que
//! la tabla refleje el cambio sin recarga manual; en fallo la cache no
//! se toca (sin mutación optimista).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::CollectionCache;
use crate::dto::BookingFilters;
use crate::models::{Booking, BookingStatus, PaymentStatus};
use crate::services::BookingService;
use crate::ui::{Notifier, NotifyKind};
use crate::utils::errors::{ApiResult, BookingError};

/// Vista administrada del listado de reservas con sus transiciones
pub struct BookingLifecycle {
    bookings: BookingService,
    cache: CollectionCache<Booking>,
    notifier: Arc<dyn Notifier>,
    in_flight: AtomicBool,
}

impl BookingLifecycle {
    pub fn new(
        bookings: BookingService,
        cache: CollectionCache<Booking>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            bookings,
            cache,
            notifier,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn cache(&self) -> &CollectionCache<Booking> {
        &self.cache
    }

    /// Listado completo para la tabla, servido de cache si sigue válida
    ///
    /// Las consultas filtradas van directas a `BookingService::list`; la
    /// cache solo respalda la colección base.
    pub async fn load(&self) -> ApiResult<Vec<Booking>> {
        if let Some(items) = self.cache.get().await {
            debug!(count = items.len(), "bookings served from cache");
            return Ok(items);
        }
        let items = self.bookings.list(&BookingFilters::default()).await?;
        self.cache.put(items.clone()).await;
        Ok(items)
    }

    /// Hay una transición en curso (la interfaz deshabilita la acción)
    pub fn is_updating(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Solicitar una transición de estado con anotación opcional
    pub async fn update_status(
        &self,
        id: i64,
        status: BookingStatus,
        notes: Option<String>,
    ) -> Result<Booking, BookingError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(BookingError::SubmissionInProgress);
        }

        let result = self.bookings.update_status(id, status, notes).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(booking) => {
                self.cache.invalidate().await;
                info!(booking_id = id, status = status.as_str(), "booking status updated");
                self.notifier.notify(
                    "Status updated",
                    &format!("Booking #{id} is now {}", status.as_str()),
                    NotifyKind::Success,
                );
                Ok(booking)
            }
            // el fallo ya fue notificado por la pasarela; la fila conserva
            // su estado anterior porque la cache no se invalidó
            Err(e) => Err(e.into()),
        }
    }

    /// Solicitar un cambio de estado de pago
    pub async fn update_payment(
        &self,
        id: i64,
        payment_status: PaymentStatus,
    ) -> Result<Booking, BookingError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(BookingError::SubmissionInProgress);
        }

        let result = self.bookings.update_payment(id, payment_status).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(booking) => {
                self.cache.invalidate().await;
                info!(
                    booking_id = id,
                    payment_status = payment_status.as_str(),
                    "booking payment updated"
                );
                self.notifier.notify(
                    "Payment updated",
                    &format!("Booking #{id} payment is now {}", payment_status.as_str()),
                    NotifyKind::Success,
                );
                Ok(booking)
            }
            Err(e) => Err(e.into()),
        }
    }
}
