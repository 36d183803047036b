//! Database schema definitions

/// SQL to create the messages table
pub const CREATE_MESSAGES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_message TEXT NOT NULL,
    bot_response TEXT NOT NULL,
    timestamp TEXT NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_messages_user_message ON messages(user_message)",
];

/// All schema creation statements, in execution order
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_MESSAGES_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
