//! Idempotent schema setup, run once before serving traffic.
//! Statements are ordered by foreign-key dependency: customers first, then
//! the tables that reference it, then the order/product association.

use crate::error::AppError;
use sqlx::PgPool;

/// Customer deletion policy, enforced by the schema rather than left
/// implicit: orders keep their rows with customer_id set to NULL; the
/// one-to-one account row and association rows are removed with their parent.
const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(320),
        phone VARCHAR(15)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        id BIGSERIAL PRIMARY KEY,
        date DATE NOT NULL,
        customer_id BIGINT REFERENCES customers (id) ON DELETE SET NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customer_accounts (
        id BIGSERIAL PRIMARY KEY,
        username VARCHAR(255) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        customer_id BIGINT NOT NULL UNIQUE REFERENCES customers (id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        price DOUBLE PRECISION NOT NULL,
        CONSTRAINT products_price_non_negative CHECK (price >= 0)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS order_product (
        order_id BIGINT NOT NULL REFERENCES orders (id) ON DELETE CASCADE,
        product_id BIGINT NOT NULL REFERENCES products (id) ON DELETE CASCADE,
        PRIMARY KEY (order_id, product_id)
    )
    "#,
];

/// Create the five tables if they do not exist.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_statement_is_idempotent() {
        for ddl in DDL {
            assert!(ddl.contains("IF NOT EXISTS"), "not idempotent: {}", ddl);
        }
    }

    #[test]
    fn tables_created_in_dependency_order() {
        let positions: Vec<usize> = ["customers", "orders", "customer_accounts", "products", "order_product"]
            .iter()
            .map(|t| {
                DDL.iter()
                    .position(|ddl| ddl.contains(&format!("CREATE TABLE IF NOT EXISTS {}", t)))
                    .unwrap_or_else(|| panic!("no DDL for table {}", t))
            })
            .collect();
        let customers = positions[0];
        let orders = positions[1];
        let association = positions[4];
        assert!(customers < orders, "customers must precede orders");
        assert!(orders < association, "orders must precede order_product");
        assert!(positions[3] < association, "products must precede order_product");
    }

    #[test]
    fn customer_delete_policy_is_explicit() {
        let orders_ddl = DDL[1];
        assert!(orders_ddl.contains("ON DELETE SET NULL"));
        let accounts_ddl = DDL[2];
        assert!(accounts_ddl.contains("ON DELETE CASCADE"));
    }

    #[test]
    fn price_has_schema_level_floor() {
        let products_ddl = DDL[3];
        assert!(products_ddl.contains("CHECK (price >= 0)"));
    }
}
