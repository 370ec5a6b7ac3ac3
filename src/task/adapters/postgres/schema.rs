//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Trimmed task title.
        #[max_length = 200]
        title -> Varchar,
        /// Optional trimmed description.
        #[max_length = 1000]
        description -> Nullable<Varchar>,
        /// Canonical status name.
        #[max_length = 20]
        status -> Varchar,
        /// Due date.
        due_at -> Timestamptz,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
