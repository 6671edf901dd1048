use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202601010001_create_users::Migration),
            Box::new(migrations::m202601010002_create_events::Migration),
            Box::new(migrations::m202601010003_create_attendees::Migration),
            Box::new(migrations::m202601010004_create_scan_history::Migration),
        ]
    }
}
