use crate::endpoints::user;
use crate::types::{EmployeeRequest, PageParams, PageResponse, UserResponse};
use crate::{Client, Result};

pub struct CustomersService {
    client: Client,
}

impl CustomersService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: PageParams) -> Result<PageResponse<UserResponse>> {
        self.client.get(user::CUSTOMER, &params.to_query()).await
    }

    pub async fn get(&self, customer_id: &str) -> Result<UserResponse> {
        self.client.get(&user::customer_by_id(customer_id), &[]).await
    }
}

pub struct EmployeesService {
    client: Client,
}

impl EmployeesService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: PageParams) -> Result<PageResponse<UserResponse>> {
        self.client.get(user::EMPLOYEE, &params.to_query()).await
    }

    pub async fn get(&self, employee_id: &str) -> Result<UserResponse> {
        self.client.get(&user::employee_by_id(employee_id), &[]).await
    }

    pub async fn create(&self, params: &EmployeeRequest) -> Result<UserResponse> {
        self.client.post(user::EMPLOYEE, params).await
    }

    pub async fn update(&self, employee_id: &str, params: &EmployeeRequest) -> Result<UserResponse> {
        self.client.put(&user::employee_by_id(employee_id), params).await
    }

    pub async fn delete(&self, employee_id: &str) -> Result<()> {
        self.client.delete(&user::employee_by_id(employee_id)).await
    }
}
