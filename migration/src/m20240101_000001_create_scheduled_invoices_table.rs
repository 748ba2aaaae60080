use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Entities map timestamps as DateTime<Utc>, which requires
// timestamptz columns on the Postgres side.
fn table_statement() -> TableCreateStatement {
    Table::create()
        .table(ScheduledInvoice::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(ScheduledInvoice::Id)
                .uuid()
                .not_null()
                .primary_key()
                .extra("DEFAULT gen_random_uuid()".to_string())
        )
        .col(ColumnDef::new(ScheduledInvoice::Email).string().not_null())
        .col(ColumnDef::new(ScheduledInvoice::Amount).big_integer().not_null())
        .col(ColumnDef::new(ScheduledInvoice::Cadence).string_len(20).not_null())
        .col(ColumnDef::new(ScheduledInvoice::CutOffDay).small_integer().not_null())
        .col(ColumnDef::new(ScheduledInvoice::Concept).text().not_null())
        .col(ColumnDef::new(ScheduledInvoice::IsActive).boolean().not_null())
        .col(ColumnDef::new(ScheduledInvoice::Status).string_len(20).not_null())
        .col(ColumnDef::new(ScheduledInvoice::LastSent).timestamp_with_time_zone().null())
        .col(ColumnDef::new(ScheduledInvoice::NextSendDate).date().null())
        .col(
            ColumnDef::new(ScheduledInvoice::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .extra("DEFAULT NOW()".to_string())
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table_statement()).await?;

        // The sweep filters on is_active + next_send_date
        manager.create_index(
            Index::create()
                .name("idx_scheduled_invoices_is_active")
                .table(ScheduledInvoice::Table)
                .col(ScheduledInvoice::IsActive)
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx_scheduled_invoices_next_send_date")
                .table(ScheduledInvoice::Table)
                .col(ScheduledInvoice::NextSendDate)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ScheduledInvoice::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ScheduledInvoice {
    #[sea_orm(iden = "scheduled_invoices")]
    Table,
    Id,
    Email,
    Amount,
    Cadence,
    CutOffDay,
    Concept,
    IsActive,
    Status,
    LastSent,
    NextSendDate,
    CreatedAt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_columns_carry_time_zone() {
        let sql = table_statement().to_string(PostgresQueryBuilder);

        assert!(sql.contains("\"last_sent\" timestamp with time zone"));
        assert!(sql.contains("\"created_at\" timestamp with time zone"));
    }
}
