//! Customer Manager: list, create, full update, delete and edit-in-form.

use async_trait::async_trait;
use log::warn;

use super::Page;
use crate::api::{ApiClient, ApiError, Transport};
use crate::model::customer::{coerce_age, Customer, Gender};

/// State of the Customer Manager page.
#[derive(Debug, Default)]
pub struct CustomerManager {
    /// Snapshot of the last successful `GET /allcustomers`.
    pub rows: Vec<Customer>,
    pub form: Customer,
    /// Raw text of the age input while it is being edited. Coerced into
    /// `form.age` when the form is submitted.
    pub age_input: Option<String>,
    /// Set while a create/update/delete sequence is in flight. Only disables
    /// buttons; actions are not rejected while it is set.
    pub busy: bool,
}

#[derive(Debug)]
pub enum CustomerMsg {
    /// Initial load.
    Load,
    Loaded(Result<Vec<Customer>, ApiError>),
    EditId(String),
    EditName(String),
    EditAge(String),
    EditGender(Gender),
    Fill(Customer),
    Create,
    Created(Result<(), ApiError>),
    Update,
    Updated(Result<(), ApiError>),
    Remove(String),
    Removed(Result<(), ApiError>),
    /// Refresh that closes a mutation sequence.
    Resynced(Result<Vec<Customer>, ApiError>),
    Lookup,
    Found(Result<Customer, ApiError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CustomerCmd {
    FetchAll,
    Resync,
    Create(Customer),
    Update(Customer),
    Remove(String),
    Lookup(String),
}

impl CustomerManager {
    /// Text shown in the age input.
    pub fn age_text(&self) -> String {
        match &self.age_input {
            Some(text) => text.clone(),
            None => self.form.age.to_string(),
        }
    }

    fn commit_age(&mut self) {
        if let Some(text) = self.age_input.take() {
            self.form.age = coerce_age(&text);
        }
    }

    fn replace_form(&mut self, form: Customer) {
        self.form = form;
        self.age_input = None;
    }

    fn apply_rows(&mut self, outcome: Result<Vec<Customer>, ApiError>) {
        match outcome {
            Ok(rows) => self.rows = rows,
            Err(err) => warn!("customer list refresh failed: {}", err),
        }
    }
}

#[async_trait(?Send)]
impl Page for CustomerManager {
    type Msg = CustomerMsg;
    type Cmd = CustomerCmd;

    fn update(&mut self, msg: CustomerMsg) -> Option<CustomerCmd> {
        match msg {
            CustomerMsg::Load => Some(CustomerCmd::FetchAll),
            CustomerMsg::Loaded(outcome) => {
                self.apply_rows(outcome);
                None
            }
            CustomerMsg::EditId(value) => {
                self.form.customer_id = value;
                None
            }
            CustomerMsg::EditName(value) => {
                self.form.customer_name = value;
                None
            }
            CustomerMsg::EditAge(value) => {
                self.age_input = Some(value);
                None
            }
            CustomerMsg::EditGender(gender) => {
                self.form.gender = gender;
                None
            }
            CustomerMsg::Fill(row) => {
                self.replace_form(row);
                None
            }
            CustomerMsg::Create => {
                if self.form.customer_id.is_empty() || self.form.customer_name.is_empty() {
                    return None;
                }
                self.commit_age();
                self.busy = true;
                Some(CustomerCmd::Create(self.form.clone()))
            }
            CustomerMsg::Created(outcome) => {
                if let Err(err) = outcome {
                    warn!("create customer failed: {}", err);
                }
                self.replace_form(Customer::default());
                Some(CustomerCmd::Resync)
            }
            // Only the identifier is required for an update.
            CustomerMsg::Update => {
                if self.form.customer_id.is_empty() {
                    return None;
                }
                self.commit_age();
                self.busy = true;
                Some(CustomerCmd::Update(self.form.clone()))
            }
            CustomerMsg::Updated(outcome) => {
                if let Err(err) = outcome {
                    warn!("update customer failed: {}", err);
                }
                Some(CustomerCmd::Resync)
            }
            CustomerMsg::Remove(customer_id) => {
                self.busy = true;
                Some(CustomerCmd::Remove(customer_id))
            }
            CustomerMsg::Removed(outcome) => {
                if let Err(err) = outcome {
                    warn!("delete customer failed: {}", err);
                }
                Some(CustomerCmd::Resync)
            }
            CustomerMsg::Resynced(outcome) => {
                self.apply_rows(outcome);
                self.busy = false;
                None
            }
            CustomerMsg::Lookup => {
                if self.form.customer_id.is_empty() {
                    return None;
                }
                Some(CustomerCmd::Lookup(self.form.customer_id.clone()))
            }
            CustomerMsg::Found(outcome) => {
                match outcome {
                    Ok(customer) => self.replace_form(customer),
                    Err(err) => warn!("customer lookup failed: {}", err),
                }
                None
            }
        }
    }

    async fn execute<T: Transport>(client: &ApiClient<T>, cmd: CustomerCmd) -> CustomerMsg {
        match cmd {
            CustomerCmd::FetchAll => CustomerMsg::Loaded(client.list_customers().await),
            CustomerCmd::Resync => CustomerMsg::Resynced(client.list_customers().await),
            CustomerCmd::Create(customer) => {
                CustomerMsg::Created(client.create_customer(&customer).await)
            }
            CustomerCmd::Update(customer) => {
                CustomerMsg::Updated(client.update_customer(&customer).await)
            }
            CustomerCmd::Remove(customer_id) => {
                CustomerMsg::Removed(client.delete_customer(&customer_id).await)
            }
            CustomerCmd::Lookup(customer_id) => {
                CustomerMsg::Found(client.get_customer(&customer_id).await)
            }
        }
    }

    fn notice(msg: &CustomerMsg) -> Option<String> {
        match msg {
            CustomerMsg::Created(Err(err)) => Some(format!("Create failed: {}", err)),
            CustomerMsg::Updated(Err(err)) => Some(format!("Update failed: {}", err)),
            CustomerMsg::Removed(Err(err)) => Some(format!("Delete failed: {}", err)),
            CustomerMsg::Found(Err(err)) => Some(format!("Lookup failed: {}", err)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{MockTransport, BASE_URL};
    use crate::api::Method;
    use crate::config::ApiConfig;
    use crate::pages::{init_logger, run_to_idle};
    use serde_json::{json, Value};

    const ANN: &str = r#"[{"customer_id":"C1","customer_name":"Ann","age":30,"gender":"female"}]"#;

    fn client() -> ApiClient<MockTransport> {
        init_logger();
        ApiClient::new(ApiConfig::new(BASE_URL), MockTransport::new())
    }

    fn ann() -> Customer {
        Customer {
            customer_id: "C1".to_string(),
            customer_name: "Ann".to_string(),
            age: 30,
            gender: Gender::Female,
        }
    }

    async fn loaded(client: &ApiClient<MockTransport>) -> CustomerManager {
        let mut page = CustomerManager::default();
        run_to_idle(&mut page, client, CustomerMsg::Load).await;
        client.transport().clear();
        page
    }

    #[tokio::test]
    async fn test_initial_load_renders_rows() {
        let client = client();
        client.transport().respond(Method::Get, "/allcustomers", 200, ANN);

        let mut page = CustomerManager::default();
        run_to_idle(&mut page, &client, CustomerMsg::Load).await;

        assert_eq!(client.transport().calls(), vec!["GET /allcustomers"]);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].row_label(), "C1 — Ann / 30 / female");
        assert!(!page.busy);
    }

    #[tokio::test]
    async fn test_unlisted_gender_does_not_drop_list() {
        let client = client();
        client.transport().respond(
            Method::Get,
            "/allcustomers",
            200,
            r#"[{"customer_id":"C1","customer_name":"Ann","age":30,"gender":"female"},
                {"customer_id":"C2","customer_name":"Sam","age":28,"gender":"other"}]"#,
        );

        let mut page = CustomerManager::default();
        run_to_idle(&mut page, &client, CustomerMsg::Load).await;

        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[1].gender, Gender::Other("other".to_string()));
        assert_eq!(page.rows[1].row_label(), "C2 — Sam / 28 / other");
    }

    #[tokio::test]
    async fn test_non_array_list_clears_rows() {
        let client = client();
        client.transport().respond(Method::Get, "/allcustomers", 200, ANN);
        let mut page = loaded(&client).await;
        assert_eq!(page.rows.len(), 1);

        client
            .transport()
            .respond(Method::Get, "/allcustomers", 500, r#"{"detail":"boom"}"#);
        run_to_idle(&mut page, &client, CustomerMsg::Load).await;
        assert!(page.rows.is_empty());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_rows() {
        let client = client();
        client.transport().respond(Method::Get, "/allcustomers", 200, ANN);
        let mut page = loaded(&client).await;

        client.transport().fail(Method::Get, "/allcustomers");
        run_to_idle(&mut page, &client, CustomerMsg::Load).await;
        assert_eq!(page.rows, vec![ann()]);

        client
            .transport()
            .respond(Method::Get, "/allcustomers", 200, "not json");
        run_to_idle(&mut page, &client, CustomerMsg::Load).await;
        assert_eq!(page.rows, vec![ann()]);
    }

    #[tokio::test]
    async fn test_create_posts_then_refreshes_once() {
        let client = client();
        client.transport().respond(Method::Get, "/allcustomers", 200, "[]");
        let mut page = loaded(&client).await;

        client.transport().respond(Method::Post, "/customers", 200, "{}");
        client.transport().respond(Method::Get, "/allcustomers", 200, ANN);

        page.update(CustomerMsg::EditId("C1".to_string()));
        page.update(CustomerMsg::EditName("Ann".to_string()));
        page.update(CustomerMsg::EditAge("30".to_string()));
        page.update(CustomerMsg::EditGender(Gender::Female));
        run_to_idle(&mut page, &client, CustomerMsg::Create).await;

        assert_eq!(
            client.transport().calls(),
            vec!["POST /customers", "GET /allcustomers"]
        );
        let body: Value =
            serde_json::from_str(client.transport().requests()[0].body.as_deref().unwrap())
                .unwrap();
        assert_eq!(
            body,
            json!({"customer_id":"C1","customer_name":"Ann","age":30,"gender":"female"})
        );
        assert_eq!(page.form, Customer::default());
        assert_eq!(page.rows, vec![ann()]);
        assert!(!page.busy);
    }

    #[test]
    fn test_create_sets_busy_until_refresh() {
        let mut page = CustomerManager::default();
        page.update(CustomerMsg::Fill(ann()));

        assert_eq!(page.update(CustomerMsg::Create), Some(CustomerCmd::Create(ann())));
        assert!(page.busy);

        assert_eq!(page.update(CustomerMsg::Created(Ok(()))), Some(CustomerCmd::Resync));
        assert!(page.busy);
        assert_eq!(page.form, Customer::default());

        assert_eq!(page.update(CustomerMsg::Resynced(Ok(vec![ann()]))), None);
        assert!(!page.busy);
    }

    #[tokio::test]
    async fn test_create_requires_id_and_name() {
        let client = client();
        let mut page = CustomerManager::default();

        page.update(CustomerMsg::EditName("X".to_string()));
        run_to_idle(&mut page, &client, CustomerMsg::Create).await;
        assert!(client.transport().requests().is_empty());
        assert!(page.rows.is_empty());
        assert!(!page.busy);

        page.update(CustomerMsg::EditId("C5".to_string()));
        page.update(CustomerMsg::EditName(String::new()));
        run_to_idle(&mut page, &client, CustomerMsg::Create).await;
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_requires_only_id() {
        let client = client();
        let mut page = CustomerManager::default();
        page.update(CustomerMsg::EditName("Nameless".to_string()));
        run_to_idle(&mut page, &client, CustomerMsg::Update).await;
        assert!(client.transport().requests().is_empty());

        client.transport().respond(Method::Put, "/customers", 200, "{}");
        client.transport().respond(Method::Get, "/allcustomers", 200, "[]");
        page.update(CustomerMsg::EditId("C1".to_string()));
        page.update(CustomerMsg::EditName(String::new()));
        run_to_idle(&mut page, &client, CustomerMsg::Update).await;
        assert_eq!(
            client.transport().calls(),
            vec!["PUT /customers", "GET /allcustomers"]
        );
    }

    #[tokio::test]
    async fn test_update_keeps_form() {
        let client = client();
        client.transport().respond(Method::Get, "/allcustomers", 200, ANN);
        let mut page = loaded(&client).await;

        let renamed = Customer {
            customer_name: "Anne".to_string(),
            ..ann()
        };
        client.transport().respond(Method::Put, "/customers", 200, "{}");
        client.transport().respond(
            Method::Get,
            "/allcustomers",
            200,
            r#"[{"customer_id":"C1","customer_name":"Anne","age":30,"gender":"female"}]"#,
        );
        page.update(CustomerMsg::Fill(page.rows[0].clone()));
        page.update(CustomerMsg::EditName("Anne".to_string()));
        run_to_idle(&mut page, &client, CustomerMsg::Update).await;

        assert_eq!(page.form, renamed);
        assert_eq!(page.rows, vec![renamed]);
    }

    #[tokio::test]
    async fn test_remove_escapes_id() {
        let client = client();
        client
            .transport()
            .respond(Method::Delete, "/customers?customer_id=A%26B", 200, "{}");
        client.transport().respond(Method::Get, "/allcustomers", 200, "[]");

        let mut page = CustomerManager::default();
        run_to_idle(&mut page, &client, CustomerMsg::Remove("A&B".to_string())).await;

        let requests = client.transport().requests();
        assert_eq!(requests[0].url, "http://api.test/customers?customer_id=A%26B");
        assert_eq!(requests[0].body, None);
        assert_eq!(
            client.transport().calls(),
            vec!["DELETE /customers?customer_id=A%26B", "GET /allcustomers"]
        );
        assert!(!page.busy);
    }

    #[tokio::test]
    async fn test_rows_converge_to_server_after_failed_mutation() {
        let client = client();
        client.transport().respond(Method::Get, "/allcustomers", 200, ANN);
        let mut page = loaded(&client).await;

        client.transport().respond(
            Method::Post,
            "/customers",
            409,
            r#"{"detail":"Customer already exists"}"#,
        );
        let msg = CustomerMsg::Created(Err(ApiError::Status {
            status: 409,
            body: String::new(),
        }));
        assert!(CustomerManager::notice(&msg).is_some());

        page.update(CustomerMsg::Fill(ann()));
        run_to_idle(&mut page, &client, CustomerMsg::Create).await;

        assert_eq!(
            client.transport().calls(),
            vec!["POST /customers", "GET /allcustomers"]
        );
        assert_eq!(page.rows, vec![ann()]);
        assert_eq!(page.form, Customer::default());
    }

    #[test]
    fn test_fill_copies_row() {
        let mut page = CustomerManager::default();
        page.rows = vec![ann()];
        assert_eq!(page.update(CustomerMsg::Fill(ann())), None);
        assert_eq!(page.form, ann());
        assert_eq!(page.rows, vec![ann()]);
    }

    #[test]
    fn test_editing_form_leaves_rows() {
        let mut page = CustomerManager::default();
        page.rows = vec![ann()];
        page.update(CustomerMsg::Fill(ann()));
        page.update(CustomerMsg::EditName("Zed".to_string()));
        page.update(CustomerMsg::EditAge("nope".to_string()));
        assert_eq!(page.form.customer_name, "Zed");
        assert_eq!(page.age_text(), "nope");
        assert_eq!(page.rows, vec![ann()]);
    }

    #[test]
    fn test_age_text_is_kept_until_submit() {
        let mut page = CustomerManager::default();
        assert_eq!(page.age_text(), "0");

        page.update(CustomerMsg::Fill(ann()));
        assert_eq!(page.age_text(), "30");

        page.update(CustomerMsg::EditAge(String::new()));
        assert_eq!(page.age_text(), "");
        page.update(CustomerMsg::EditAge("5".to_string()));
        assert_eq!(page.age_text(), "5");
        assert_eq!(page.form.age, 30);

        let cmd = page.update(CustomerMsg::Update);
        assert_eq!(
            cmd,
            Some(CustomerCmd::Update(Customer { age: 5, ..ann() }))
        );
        assert_eq!(page.age_text(), "5");
    }

    #[tokio::test]
    async fn test_create_coerces_cleared_age_to_zero() {
        let client = client();
        client.transport().respond(Method::Post, "/customers", 200, "{}");
        client.transport().respond(Method::Get, "/allcustomers", 200, "[]");

        let mut page = CustomerManager::default();
        page.update(CustomerMsg::Fill(ann()));
        page.update(CustomerMsg::EditAge(String::new()));
        run_to_idle(&mut page, &client, CustomerMsg::Create).await;

        let body: Value =
            serde_json::from_str(client.transport().requests()[0].body.as_deref().unwrap())
                .unwrap();
        assert_eq!(body["age"], json!(0));
        assert_eq!(page.age_text(), "0");
    }

    #[tokio::test]
    async fn test_lookup_fills_form() {
        let client = client();
        client.transport().respond(
            Method::Get,
            "/customers?customer_id=C1",
            200,
            r#"{"customer_id":"C1","customer_name":"Ann","age":30,"gender":"female"}"#,
        );
        let mut page = CustomerManager::default();
        run_to_idle(&mut page, &client, CustomerMsg::Lookup).await;
        assert!(client.transport().requests().is_empty());

        page.update(CustomerMsg::EditId("C1".to_string()));
        run_to_idle(&mut page, &client, CustomerMsg::Lookup).await;
        assert_eq!(page.form, ann());
    }

    #[tokio::test]
    async fn test_lookup_miss_keeps_form() {
        let client = client();
        client.transport().respond(
            Method::Get,
            "/customers?customer_id=C9",
            404,
            r#"{"detail":"Customer not found"}"#,
        );
        let mut page = CustomerManager::default();
        page.update(CustomerMsg::EditId("C9".to_string()));
        page.update(CustomerMsg::EditName("Draft".to_string()));
        run_to_idle(&mut page, &client, CustomerMsg::Lookup).await;
        assert_eq!(page.form.customer_id, "C9");
        assert_eq!(page.form.customer_name, "Draft");
    }
}
