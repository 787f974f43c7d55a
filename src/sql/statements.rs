//! Every statement the service runs. Values are always bound as parameters.

pub const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT UNIQUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

pub const CREATE_ORDERS: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id SERIAL PRIMARY KEY,
        customer_name TEXT NOT NULL,
        total NUMERIC(10,2) NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

pub const LIST_CUSTOMERS: &str =
    "SELECT id, name, email, created_at FROM customers ORDER BY id DESC";

pub const INSERT_CUSTOMER: &str = r#"
    INSERT INTO customers (name, email)
    VALUES ($1, $2)
    RETURNING id, name, email, created_at
"#;

pub const SELECT_CUSTOMER: &str = "SELECT id, name, email, created_at FROM customers WHERE id = $1";

/// `$3` says whether the email is being written at all; `$4` is the new value (NULL clears it).
pub const UPDATE_CUSTOMER: &str = r#"
    UPDATE customers
       SET name = COALESCE($2, name),
           email = CASE WHEN $3 THEN $4 ELSE email END
     WHERE id = $1
 RETURNING id, name, email, created_at
"#;

pub const DELETE_CUSTOMER: &str = "DELETE FROM customers WHERE id = $1";

pub const LIST_ORDERS: &str =
    "SELECT id, customer_name, total, created_at FROM orders ORDER BY id DESC";

pub const INSERT_ORDER: &str = r#"
    INSERT INTO orders (customer_name, total)
    VALUES ($1, $2)
    RETURNING id, customer_name, total, created_at
"#;

/// Serializes schema creation across sessions until the surrounding transaction ends.
pub const SCHEMA_LOCK: &str = "SELECT pg_advisory_xact_lock($1)";
