//! Diesel schema for message persistence.

diesel::table! {
    /// Stored messages.
    messages (id) {
        /// Repository-assigned identifier.
        id -> Int8,
        /// Unique message title.
        title -> Text,
        /// Message body.
        body -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
