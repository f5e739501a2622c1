//! Flujo de disponibilidad y reserva
//!
//! Secuencia del formulario público: validación local por campo (nunca
//! toca la red), check de disponibilidad del coche para el rango pedido,
//! y creación de la reserva. "No disponible" es un resultado de dominio
//! con su propio aviso, distinto de un fallo de transporte. Un segundo
//! envío mientras hay uno en vuelo se rechaza sin llamada de red.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::dto::CreateBookingRequest;
use crate::models::{rental_cost, rental_days, Booking, Car, ClientInfo};
use crate::services::{BookingService, CarService};
use crate::ui::{Navigator, Notifier, NotifyKind};
use crate::utils::errors::BookingError;
use crate::utils::validation::validate_date;

/// Datos del formulario de reserva, tal como los teclea el usuario
///
/// Las fechas llegan como `YYYY-MM-DD` desde el selector; se parsean y
/// ordenan en `validate_all`.
#[derive(Debug, Clone, Default, Validate)]
pub struct BookingForm {
    pub start_date: String,
    pub end_date: String,
    #[validate(length(min = 2, message = "first name must be at least 2 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "last name must be at least 2 characters"))]
    pub last_name: String,
    #[validate(email(message = "a valid email address is required"))]
    pub email: String,
    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,
}

impl BookingForm {
    /// Validación completa, con errores acotados por campo
    ///
    /// Devuelve las fechas parseadas solo si todo el formulario es válido.
    pub fn validate_all(&self) -> Result<(NaiveDate, NaiveDate), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let mut dates = None;
        match (validate_date(&self.start_date), validate_date(&self.end_date)) {
            (Ok(start), Ok(end)) => {
                if end <= start {
                    let mut error = ValidationError::new("date_order");
                    error.message = Some("end date must be after start date".into());
                    errors.add("end_date", error);
                } else {
                    dates = Some((start, end));
                }
            }
            (start, end) => {
                if let Err(error) = start {
                    errors.add("start_date", error);
                }
                if let Err(error) = end {
                    errors.add("end_date", error);
                }
            }
        }

        match (dates, errors.is_empty()) {
            (Some(dates), true) => Ok(dates),
            _ => Err(errors),
        }
    }

    fn client_info(&self) -> ClientInfo {
        ClientInfo {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Presupuesto mostrado durante la selección de fechas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentalQuote {
    pub days: i64,
    pub total: f64,
}

/// Orquestación del envío del formulario de reserva
pub struct BookingWorkflow {
    cars: CarService,
    bookings: BookingService,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    in_flight: AtomicBool,
}

impl BookingWorkflow {
    pub fn new(
        cars: CarService,
        bookings: BookingService,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            cars,
            bookings,
            notifier,
            navigator,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Recalcular el presupuesto en cada cambio de fechas
    ///
    /// Misma fórmula que usa `submit`, para que lo mostrado y lo enviado
    /// no puedan divergir. `None` mientras las fechas no formen un rango.
    pub fn quote(&self, car: &Car, form: &BookingForm) -> Option<RentalQuote> {
        let start = validate_date(&form.start_date).ok()?;
        let end = validate_date(&form.end_date).ok()?;
        if end <= start {
            return None;
        }
        Some(RentalQuote {
            days: rental_days(start, end),
            total: rental_cost(car.price_per_day, start, end),
        })
    }

    /// Hay un envío en curso (la interfaz deshabilita el botón)
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Enviar el formulario de reserva
    pub async fn submit(&self, car: &Car, form: &BookingForm) -> Result<Booking, BookingError> {
        // Validación local primero: un formulario inválido nunca toca la red
        let (start, end) = form.validate_all()?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("submit rejected, another submission is in flight");
            return Err(BookingError::SubmissionInProgress);
        }

        let result = self.submit_inner(car, form, start, end).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn submit_inner(
        &self,
        car: &Car,
        form: &BookingForm,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Booking, BookingError> {
        let availability = self.cars.check_availability(car.id, start, end).await?;
        if !availability.available {
            let message = availability.message.clone();
            self.notifier.notify(
                "Car unavailable",
                message.as_deref().unwrap_or(
                    "The selected car is not available for these dates. Please choose a different range.",
                ),
                NotifyKind::Error,
            );
            return Err(BookingError::Unavailable { message });
        }

        let request = CreateBookingRequest {
            car_id: car.id,
            start_date: start,
            end_date: end,
            client_info: form.client_info(),
        };
        // Un fallo aquí ya fue notificado por la pasarela; el formulario
        // queda intacto para reintentar
        let booking = self.bookings.create(&request).await?;

        info!(booking_id = booking.id, car_id = car.id, "booking created");
        self.notifier.notify(
            "Booking created",
            "Your booking was created successfully. A confirmation will be sent to your email.",
            NotifyKind::Success,
        );
        self.navigator.to("/booking/success");
        Ok(booking)
    }
}
