use super::{AppError, Contact, ContactGateway, ContactId, NewContact};
use reqwest::blocking;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// JSON-over-HTTP phonebook service following json-server conventions:
/// the collection lives at the base url and each contact at `{base}/{id}`.
pub struct RemoteStorage {
    pub medium: String,
    pub base_url: Url,
    client: blocking::Client,
}

impl RemoteStorage {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)?;

        if !is_http(&base_url) {
            return Err(AppError::Validation(format!(
                "Service url must use http or https, got '{}'",
                base_url.scheme()
            )));
        }

        let client = blocking::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            medium: "remote".to_string(),
            base_url,
            client,
        })
    }

    /// Url of a single contact: the base url with `id` appended as a path
    /// segment.
    pub fn contact_url(&self, id: &ContactId) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Validation("Service url cannot take a contact id".to_string()))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }
}

impl ContactGateway for RemoteStorage {
    fn get_all(&self) -> Result<Vec<Contact>, AppError> {
        debug!(url = %self.base_url, "GET contacts");

        let res = self.client.get(self.base_url.clone()).send()?;
        let res = res.error_for_status()?;

        let contacts: Vec<Contact> = serde_json::from_str(&res.text()?)?;
        debug!(count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn create(&self, contact: &NewContact) -> Result<Contact, AppError> {
        debug!(url = %self.base_url, name = %contact.name, "POST contact");

        let res = self
            .client
            .post(self.base_url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(contact)?)
            .send()?;
        let res = res.error_for_status()?;

        Ok(serde_json::from_str(&res.text()?)?)
    }

    fn update(&self, id: &ContactId, contact: &Contact) -> Result<Contact, AppError> {
        let url = self.contact_url(id)?;
        debug!(%url, "PUT contact");

        let res = self
            .client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(contact)?)
            .send()?;
        let res = res.error_for_status()?;

        Ok(serde_json::from_str(&res.text()?)?)
    }

    fn remove(&self, id: &ContactId) -> Result<(), AppError> {
        let url = self.contact_url(id)?;
        debug!(%url, "DELETE contact");

        self.client.delete(url).send()?.error_for_status()?;
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};

    fn storage_for(server: &ServerGuard) -> RemoteStorage {
        RemoteStorage::new(&format!("{}/persons", server.url()), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn get_all_fetches_contacts_from_remote() {
        let mut server = Server::new();
        let contacts_json = r#"
        [
            { "id": "1", "name": "Arto Hellas", "number": "040-123456" },
            { "id": "2", "name": "Ada Lovelace", "number": "39-44-5323523" },
            { "id": 3, "name": "Dan Abramov", "number": "12-43-234345" }
        ]
        "#;

        let m = server
            .mock("GET", "/persons")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(contacts_json)
            .create();

        let storage = storage_for(&server);
        let contacts = storage.get_all().unwrap();

        m.assert();
        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[1].name, "Ada Lovelace");
        assert_eq!(contacts[2].id, ContactId::Number(3));
    }

    #[test]
    fn create_posts_record_without_id() {
        let mut server = Server::new();

        let m = server
            .mock("POST", "/persons")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "Mary Poppendieck",
                "number": "39-23-6423122"
            })))
            .with_status(201)
            .with_body(r#"{"id":"7f3a","name":"Mary Poppendieck","number":"39-23-6423122"}"#)
            .create();

        let storage = storage_for(&server);
        let created = storage
            .create(&NewContact::new("Mary Poppendieck", "39-23-6423122"))
            .unwrap();

        m.assert();
        assert_eq!(created.id, ContactId::Text("7f3a".to_string()));
    }

    #[test]
    fn update_puts_full_record_at_contact_url() {
        let mut server = Server::new();

        let m = server
            .mock("PUT", "/persons/4")
            .match_body(Matcher::Json(serde_json::json!({
                "id": 4,
                "name": "Ada",
                "number": "555"
            })))
            .with_status(200)
            .with_body(r#"{"id":4,"name":"Ada","number":"555"}"#)
            .create();

        let storage = storage_for(&server);
        let contact = Contact::new(4u64, "Ada", "555");
        let updated = storage.update(&contact.id, &contact).unwrap();

        m.assert();
        assert_eq!(updated, contact);
    }

    #[test]
    fn remove_deletes_contact_url() {
        let mut server = Server::new();

        let m = server.mock("DELETE", "/persons/a1").with_status(200).create();

        let storage = storage_for(&server);
        storage.remove(&ContactId::from("a1")).unwrap();

        m.assert();
    }

    #[test]
    fn non_success_status_is_an_error() {
        let mut server = Server::new();

        let _m = server.mock("DELETE", "/persons/9").with_status(404).create();

        let storage = storage_for(&server);
        let err = storage.remove(&ContactId::Number(9)).unwrap_err();

        assert!(matches!(err, AppError::Request(_)));
    }

    #[test]
    fn malformed_body_is_a_serde_error() {
        let mut server = Server::new();

        let _m = server
            .mock("GET", "/persons")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create();

        let storage = storage_for(&server);
        assert!(matches!(storage.get_all(), Err(AppError::Serde(_))));
    }

    #[test]
    fn contact_url_appends_segment() {
        let storage =
            RemoteStorage::new("http://localhost:3001/persons/", Duration::from_secs(1)).unwrap();

        let url = storage.contact_url(&ContactId::Number(5)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/persons/5");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let res = RemoteStorage::new("ftp://example.com/persons", Duration::from_secs(1));
        assert!(matches!(res, Err(AppError::Validation(_))));
    }
}
