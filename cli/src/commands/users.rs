//! Customer and employee commands

use storefront::{Client, PageResponse, UserResponse};
use tabled::Tabled;

use crate::{output::{cell, OutputFormat}, UserCommands};

#[derive(Tabled)]
struct UserRow {
    id: String,
    email: String,
    name: String,
    role: String,
    step: String,
    status: String,
}

impl From<&UserResponse> for UserRow {
    fn from(u: &UserResponse) -> Self {
        Self {
            id: u.id.clone(),
            email: u.email.clone(),
            name: cell(u.full_name.as_deref()),
            role: u.role.clone(),
            step: u.step_active.to_string(),
            status: u.status.as_str().to_string(),
        }
    }
}

fn print_page(page: &PageResponse<UserResponse>, format: OutputFormat) {
    format.print(page, |p| p.items.iter().map(UserRow::from).collect());
}

pub async fn handle_customers(action: UserCommands, client: &Client, format: OutputFormat) -> anyhow::Result<()> {
    let customers = client.customers();
    match action {
        UserCommands::List { page, size, keyword } => {
            let users = customers.list(super::page(page, size, keyword)).await?;
            print_page(&users, format);
        }
        UserCommands::Get { id } => {
            let user = customers.get(&id).await?;
            format.print(&user, |u| vec![UserRow::from(u)]);
        }
    }
    Ok(())
}

pub async fn handle_employees(action: UserCommands, client: &Client, format: OutputFormat) -> anyhow::Result<()> {
    let employees = client.employees();
    match action {
        UserCommands::List { page, size, keyword } => {
            let users = employees.list(super::page(page, size, keyword)).await?;
            print_page(&users, format);
        }
        UserCommands::Get { id } => {
            let user = employees.get(&id).await?;
            format.print(&user, |u| vec![UserRow::from(u)]);
        }
    }
    Ok(())
}
