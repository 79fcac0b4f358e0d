//! Pharmacy repository: the cross-collection stock invariant lives here
//!
//! Orders and medicines are two independent collections; creating or
//! cancelling an order mutates the referenced medicine's stock in the same
//! critical section, so no other operation can observe a half-applied
//! state.

use super::model::{Medicine, Order};
use crate::core::{ApiError, ApiResult, KeyValueStore, SharedIdGenerator, UuidGenerator};
use std::sync::{Arc, Mutex};

/// Repository over the medicine and order collections.
#[derive(Clone)]
pub struct PharmacyService {
    medicines: KeyValueStore<Medicine>,
    orders: KeyValueStore<Order>,
    ids: SharedIdGenerator,
    mutation: Arc<Mutex<()>>,
}

impl PharmacyService {
    /// Create a service with empty stores and the production id generator.
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidGenerator))
    }

    /// Create a service with a caller-supplied id generator.
    pub fn with_id_generator(ids: SharedIdGenerator) -> Self {
        Self {
            medicines: KeyValueStore::new(),
            orders: KeyValueStore::new(),
            ids,
            mutation: Arc::new(Mutex::new(())),
        }
    }

    /// Register a medicine.
    ///
    /// A zero stock is valid (an out-of-stock item can still be listed);
    /// only the name and price carry constraints. Presence of fields is
    /// checked at the request boundary, not here.
    pub fn add_medicine(
        &self,
        name: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> ApiResult<Medicine> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ApiError::invalid_input("name", "must not be empty"));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(ApiError::invalid_input("price", "must be positive"));
        }

        let _guard = self.mutation.lock().unwrap();
        let id = self.ids.generate();
        if self.medicines.contains_key(&id) {
            return Err(ApiError::AlreadyExists {
                entity_type: "medicine",
                id,
            });
        }

        let medicine = Medicine {
            id: id.clone(),
            name,
            price,
            stock,
        };
        self.medicines.insert(id, medicine.clone());
        tracing::info!(medicine_id = %medicine.id, name = %medicine.name, stock, "medicine added");
        Ok(medicine)
    }

    /// Snapshot of the full catalogue.
    pub fn list_medicines(&self) -> Vec<Medicine> {
        self.medicines.values()
    }

    /// Place an order, decrementing the medicine's stock in the same step.
    pub fn create_order(
        &self,
        user_id: &str,
        medicine_id: &str,
        quantity: u32,
        payment_method: &str,
    ) -> ApiResult<Order> {
        if quantity == 0 {
            return Err(ApiError::invalid_input("quantity", "must be at least 1"));
        }

        let _guard = self.mutation.lock().unwrap();

        let mut medicine = self
            .medicines
            .get(medicine_id)
            .ok_or_else(|| ApiError::not_found("medicine", medicine_id))?;

        if medicine.stock < quantity {
            return Err(ApiError::InsufficientStock {
                medicine_id: medicine_id.to_string(),
                requested: quantity,
                available: medicine.stock,
            });
        }

        let id = self.ids.generate();
        if self.orders.contains_key(&id) {
            return Err(ApiError::AlreadyExists {
                entity_type: "order",
                id,
            });
        }

        medicine.stock -= quantity;
        self.medicines.insert(medicine_id, medicine);

        let order = Order {
            id: id.clone(),
            user_id: user_id.to_string(),
            medicine_id: medicine_id.to_string(),
            quantity,
            payment_method: payment_method.to_string(),
            status: Order::STATUS_ORDERED.to_string(),
        };
        self.orders.insert(id, order.clone());
        tracing::info!(order_id = %order.id, medicine_id, quantity, "order placed");
        Ok(order)
    }

    /// Cancel an order: restore the medicine's stock and remove the order.
    ///
    /// If the referenced medicine was deleted in the meantime there is
    /// nothing to restore; the cancellation still removes the order.
    pub fn cancel_order(&self, id: &str) -> ApiResult<Order> {
        let _guard = self.mutation.lock().unwrap();

        let order = self
            .orders
            .get(id)
            .ok_or_else(|| ApiError::not_found("order", id))?;

        match self.medicines.get(&order.medicine_id) {
            Some(mut medicine) => {
                medicine.stock += order.quantity;
                self.medicines.insert(order.medicine_id.clone(), medicine);
            }
            None => {
                tracing::warn!(
                    order_id = id,
                    medicine_id = %order.medicine_id,
                    "cancelling order for a deleted medicine, skipping stock restore"
                );
            }
        }

        self.orders.remove(id);
        tracing::info!(order_id = id, "order cancelled");
        Ok(order)
    }

    /// Status field of a single order.
    pub fn order_status(&self, id: &str) -> ApiResult<String> {
        self.orders
            .get(id)
            .map(|order| order.status)
            .ok_or_else(|| ApiError::not_found("order", id))
    }

    /// Snapshot of all current orders.
    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.values()
    }

    /// Remove a medicine from the catalogue. Existing orders keep their
    /// dangling reference; cancellation handles it.
    pub fn remove_medicine(&self, id: &str) -> ApiResult<Medicine> {
        let _guard = self.mutation.lock().unwrap();
        self.medicines
            .remove(id)
            .ok_or_else(|| ApiError::not_found("medicine", id))
    }
}

impl Default for PharmacyService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceGenerator;

    fn service() -> PharmacyService {
        PharmacyService::with_id_generator(Arc::new(SequenceGenerator::new()))
    }

    #[test]
    fn test_add_medicine_allows_zero_stock() {
        let svc = service();
        let medicine = svc.add_medicine("Aspirin", 5.0, 0).unwrap();
        assert_eq!(medicine.stock, 0);
    }

    #[test]
    fn test_add_medicine_rejects_bad_inputs() {
        let svc = service();
        assert!(svc.add_medicine("", 5.0, 10).is_err());
        assert!(svc.add_medicine("Aspirin", 0.0, 10).is_err());
        assert!(svc.add_medicine("Aspirin", -2.0, 10).is_err());
    }

    #[test]
    fn test_order_decrements_stock() {
        let svc = service();
        let medicine = svc.add_medicine("Aspirin", 5.0, 100).unwrap();

        let order = svc.create_order("u1", &medicine.id, 10, "card").unwrap();
        assert_eq!(order.status, Order::STATUS_ORDERED);
        assert_eq!(order.quantity, 10);

        let stock = svc.list_medicines()[0].stock;
        assert_eq!(stock, 90);
    }

    #[test]
    fn test_order_exceeding_stock_leaves_stock_unchanged() {
        let svc = service();
        let medicine = svc.add_medicine("Aspirin", 5.0, 3).unwrap();

        let err = svc.create_order("u1", &medicine.id, 10, "card").unwrap_err();
        assert_eq!(
            err,
            ApiError::InsufficientStock {
                medicine_id: medicine.id.clone(),
                requested: 10,
                available: 3,
            }
        );
        assert_eq!(svc.list_medicines()[0].stock, 3);
        assert!(svc.list_orders().is_empty());
    }

    #[test]
    fn test_order_for_unknown_medicine_fails() {
        let svc = service();
        let err = svc.create_order("u1", "nope", 1, "card").unwrap_err();
        assert_eq!(err, ApiError::not_found("medicine", "nope"));
    }

    #[test]
    fn test_zero_quantity_rejected_before_lookup() {
        let svc = service();
        let err = svc.create_order("u1", "whatever", 0, "card").unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput { field: "quantity", .. }));
    }

    #[test]
    fn test_cancel_order_restores_stock_and_removes_order() {
        let svc = service();
        let medicine = svc.add_medicine("Aspirin", 5.0, 100).unwrap();
        let order = svc.create_order("u1", &medicine.id, 10, "card").unwrap();
        assert_eq!(svc.list_medicines()[0].stock, 90);

        svc.cancel_order(&order.id).unwrap();

        assert_eq!(svc.list_medicines()[0].stock, 100);
        assert!(svc.list_orders().is_empty());
        assert!(svc.order_status(&order.id).is_err());
    }

    #[test]
    fn test_cancel_order_with_deleted_medicine_still_removes_order() {
        let svc = service();
        let medicine = svc.add_medicine("Aspirin", 5.0, 10).unwrap();
        let order = svc.create_order("u1", &medicine.id, 2, "card").unwrap();

        svc.remove_medicine(&medicine.id).unwrap();

        svc.cancel_order(&order.id).unwrap();
        assert!(svc.list_orders().is_empty());
    }

    #[test]
    fn test_cancel_missing_order_fails() {
        let svc = service();
        assert_eq!(
            svc.cancel_order("nope").unwrap_err(),
            ApiError::not_found("order", "nope")
        );
    }

    #[test]
    fn test_order_status_returns_status_only() {
        let svc = service();
        let medicine = svc.add_medicine("Aspirin", 5.0, 10).unwrap();
        let order = svc.create_order("u1", &medicine.id, 1, "cash").unwrap();

        assert_eq!(svc.order_status(&order.id).unwrap(), "Ordered");
    }
}
