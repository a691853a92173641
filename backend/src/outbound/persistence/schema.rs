//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. When a
//! migration changes a table, regenerate with `diesel print-schema` or edit
//! by hand.

diesel::table! {
    /// Operator accounts allowed to sign in.
    users (id) {
        /// Primary key.
        id -> Int4,
        /// Unique login name.
        name -> Varchar,
        /// Encoded PBKDF2 password hash.
        password -> Varchar,
    }
}

diesel::table! {
    /// Named donors. `name` is unique.
    donors (id) {
        /// Primary key.
        id -> Int4,
        /// Donor name, stored exactly as submitted.
        name -> Varchar,
    }
}

diesel::table! {
    /// Individual donations. Rows are never updated.
    donations (id) {
        /// Primary key.
        id -> Int4,
        /// Owning donor.
        donor_id -> Int4,
        /// Positive whole amount.
        value -> Int8,
        /// Insertion timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(donations -> donors (donor_id));

diesel::allow_tables_to_appear_in_same_query!(donations, donors, users);
