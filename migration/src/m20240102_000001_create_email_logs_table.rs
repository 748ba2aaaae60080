use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn table_statement() -> TableCreateStatement {
    Table::create()
        .table(EmailLog::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(EmailLog::Id)
                .uuid()
                .not_null()
                .primary_key()
                .extra("DEFAULT gen_random_uuid()".to_string())
        )
        .col(ColumnDef::new(EmailLog::ScheduledInvoiceId).uuid().not_null())
        .col(ColumnDef::new(EmailLog::Email).string().not_null())
        .col(ColumnDef::new(EmailLog::Status).string_len(20).not_null())
        .col(ColumnDef::new(EmailLog::ErrorMessage).text().null())
        .col(
            ColumnDef::new(EmailLog::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .extra("DEFAULT NOW()".to_string())
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_email_logs_scheduled_invoice")
                .from(EmailLog::Table, EmailLog::ScheduledInvoiceId)
                .to(ScheduledInvoice::Table, ScheduledInvoice::Id)
                .on_delete(ForeignKeyAction::Cascade)
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table_statement()).await?;

        manager.create_index(
            Index::create()
                .name("idx_email_logs_scheduled_invoice_id")
                .table(EmailLog::Table)
                .col(EmailLog::ScheduledInvoiceId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EmailLog::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EmailLog {
    #[sea_orm(iden = "email_logs")]
    Table,
    Id,
    ScheduledInvoiceId,
    Email,
    Status,
    ErrorMessage,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ScheduledInvoice {
    #[sea_orm(iden = "scheduled_invoices")]
    Table,
    Id,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_at_carries_time_zone() {
        let sql = table_statement().to_string(PostgresQueryBuilder);

        assert!(sql.contains("\"created_at\" timestamp with time zone"));
    }
}
