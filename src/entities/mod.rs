//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each collection (income, expenses, milestones, journal) is an independent table;
//! no entity references another by identifier.

pub mod expense;
pub mod income;
pub mod journal;
pub mod milestone;

// Re-export specific types to avoid conflicts
pub use expense::{Column as ExpenseColumn, Entity as Expense, Model as ExpenseModel};
pub use income::{Column as IncomeColumn, Entity as Income, Model as IncomeModel};
pub use journal::{Column as JournalColumn, Entity as Journal, Model as JournalModel};
pub use milestone::{Column as MilestoneColumn, Entity as Milestone, Model as MilestoneModel};
