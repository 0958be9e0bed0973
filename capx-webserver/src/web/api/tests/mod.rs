use super::*;

mod events;
mod skills;

pub mod prelude {

    use crate::web::{self, api};
    use capx_db_sqlite::Connections;

    pub use crate::web::tests::prelude::{LocalResponse as Response, *};
    pub use serde_json::{json, Value};

    pub const PASSWORD: &str = "secret123";

    pub fn setup() -> (Client, Connections) {
        web::tests::setup(vec![("/", api::routes())])
    }

    pub fn test_json(r: &Response) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn body_json(r: Response) -> Value {
        let body = r.into_string().unwrap();
        serde_json::from_str(&body).unwrap()
    }

    pub fn bearer(token: &str) -> Header<'static> {
        Header::new("Authorization", format!("Bearer {token}"))
    }

    /// Registers a new account and returns its id.
    pub fn register(client: &Client, username: &str) -> String {
        let res = client
            .post("/users")
            .header(ContentType::JSON)
            .body(json!({ "username": username, "password": PASSWORD }).to_string())
            .dispatch();
        assert_eq!(Status::Created, res.status());
        body_json(res)["id"].as_str().unwrap().to_string()
    }

    pub fn login(client: &Client, username: &str) -> Header<'static> {
        let res = client
            .post("/login")
            .header(ContentType::JSON)
            .body(json!({ "username": username, "password": PASSWORD }).to_string())
            .dispatch();
        assert_eq!(Status::Ok, res.status());
        bearer(body_json(res)["token"].as_str().unwrap())
    }

    /// Registers a new account and returns its id
    /// together with an authorization header.
    pub fn register_and_login(client: &Client, username: &str) -> (String, Header<'static>) {
        let id = register(client, username);
        (id, login(client, username))
    }

    pub fn register_staff(
        client: &Client,
        db: &Connections,
        username: &str,
    ) -> (String, Header<'static>) {
        let (id, auth) = register_and_login(client, username);
        capx_application::prelude::change_staff_status(db, username, true).unwrap();
        (id, auth)
    }

    pub fn post_json(
        client: &Client,
        auth: &Header<'static>,
        uri: &str,
        body: Value,
    ) -> (Status, Value) {
        let res = client
            .post(uri)
            .header(ContentType::JSON)
            .header(auth.clone())
            .body(body.to_string())
            .dispatch();
        (res.status(), body_json(res))
    }

    pub fn put_json(
        client: &Client,
        auth: &Header<'static>,
        uri: &str,
        body: Value,
    ) -> (Status, Value) {
        let res = client
            .put(uri)
            .header(ContentType::JSON)
            .header(auth.clone())
            .body(body.to_string())
            .dispatch();
        (res.status(), body_json(res))
    }

    pub fn get_json(client: &Client, auth: &Header<'static>, uri: &str) -> (Status, Value) {
        let res = client.get(uri).header(auth.clone()).dispatch();
        (res.status(), body_json(res))
    }

    pub fn delete(client: &Client, auth: &Header<'static>, uri: &str) -> Status {
        client.delete(uri).header(auth.clone()).dispatch().status()
    }

    pub fn new_event(name: &str) -> Value {
        json!({
            "name": name,
            "type_of_location": "virtual",
            "time_begin": 1_700_000_000,
            "time_end": 1_700_003_600,
        })
    }

    /// Creates an event and returns its id.
    pub fn create_event(client: &Client, auth: &Header<'static>, name: &str) -> String {
        let (status, event) = post_json(client, auth, "/events", new_event(name));
        assert_eq!(Status::Created, status);
        event["id"].as_str().unwrap().to_string()
    }
}
