//! Diesel schema for board persistence.

diesel::table! {
    /// One board document per owner.
    boards (owner_id) {
        /// Owning identity.
        #[max_length = 255]
        owner_id -> Varchar,
        /// Sections in storage order.
        sections -> Jsonb,
        /// Tasks in storage order.
        tasks -> Jsonb,
        /// Optimistic-concurrency revision.
        revision -> Int8,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
