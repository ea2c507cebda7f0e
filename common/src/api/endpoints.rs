//! Backend routes. Paths are relative to the configured base address.

pub const ALL_CUSTOMERS: &str = "/allcustomers";
pub const CUSTOMERS: &str = "/customers";
pub const SAMPLE: &str = "/sample";
pub const HEALTH_DB: &str = "/health/db";
pub const HEALTH_INFO: &str = "/health/info";
pub const ITEMS: &str = "/items";

/// `/customers?customer_id={id}` with the id percent-encoded, used by the
/// single-record read and by delete.
pub fn customer_by_id(customer_id: &str) -> String {
    format!(
        "{}?customer_id={}",
        CUSTOMERS,
        urlencoding::encode(customer_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_is_escaped() {
        assert_eq!(customer_by_id("C1"), "/customers?customer_id=C1");
        assert_eq!(customer_by_id("a&b"), "/customers?customer_id=a%26b");
        assert_eq!(
            customer_by_id("x y=z/?"),
            "/customers?customer_id=x%20y%3Dz%2F%3F"
        );
        assert_eq!(customer_by_id("顧客"), "/customers?customer_id=%E9%A1%A7%E5%AE%A2");
    }
}
