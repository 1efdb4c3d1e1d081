use std::sync::Arc;

use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use super::views::{self, UpdatePage};
use crate::domain::{Contact, ContactStore};

type SharedStore = Arc<ContactStore>;

/// Runs a store operation on the blocking pool. Store calls take the lock and
/// may write the contacts file, which must not stall the async workers.
async fn with_store<T, F>(store: SharedStore, op: F) -> Result<T, StatusCode>
where
    F: FnOnce(&ContactStore) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "store task failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// Fields of the add form. Absent fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateForm {
    #[serde(rename = "oldName")]
    pub old_name: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NameForm {
    pub name: String,
}

pub async fn home() -> Html<String> {
    Html(views::index_page())
}

pub async fn add_form() -> Html<String> {
    Html(views::add_page())
}

pub async fn add(
    State(store): State<SharedStore>,
    Form(form): Form<ContactForm>,
) -> Result<Redirect, StatusCode> {
    with_store(store, move |store| {
        store.add(&form.name, &form.phone, &form.email, &form.address)
    })
    .await?;
    Ok(Redirect::to("/view"))
}

pub async fn view(State(store): State<SharedStore>) -> Result<Html<String>, StatusCode> {
    let contacts = with_store(store, |store| store.list()).await?;
    Ok(Html(views::view_page(&contacts)))
}

pub async fn search_form() -> Html<String> {
    Html(views::search_page(None))
}

pub async fn search(
    State(store): State<SharedStore>,
    Form(form): Form<NameForm>,
) -> Result<Html<String>, StatusCode> {
    let name = form.name.clone();
    let found = with_store(store, move |store| store.find(&name)).await?;
    Ok(Html(views::search_page(Some((
        form.name.as_str(),
        found.as_ref(),
    )))))
}

pub async fn delete_form() -> Html<String> {
    Html(views::delete_page(None))
}

pub async fn delete(
    State(store): State<SharedStore>,
    Form(form): Form<NameForm>,
) -> Result<Response, StatusCode> {
    if with_store(store, move |store| store.delete(&form.name)).await? {
        return Ok(Redirect::to("/view").into_response());
    }

    Ok(Html(views::delete_page(Some("Contact not found"))).into_response())
}

/// `GET /update?name=..` pre-fills the form from the first matching contact.
pub async fn update_form(
    State(store): State<SharedStore>,
    Query(query): Query<NameForm>,
) -> Result<Response, StatusCode> {
    let Some(contact) = with_store(store, move |store| store.find(&query.name)).await? else {
        return Ok(Redirect::to("/view").into_response());
    };

    Ok(Html(views::update_page(&UpdatePage {
        old_name: &contact.name,
        contact: &contact,
        error: None,
    }))
    .into_response())
}

pub async fn update(
    State(store): State<SharedStore>,
    Form(form): Form<UpdateForm>,
) -> Result<Response, StatusCode> {
    let form = Arc::new(form);
    let submitted = Arc::clone(&form);
    let updated = with_store(store, move |store| {
        store.update(
            &submitted.old_name,
            &submitted.name,
            &submitted.phone,
            &submitted.email,
            &submitted.address,
        )
    })
    .await?;

    if updated {
        return Ok(Redirect::to("/view").into_response());
    }

    tracing::debug!(old_name = %form.old_name, "update target not found");

    let contact = Contact::new(
        form.name.clone(),
        form.phone.clone(),
        form.email.clone(),
        form.address.clone(),
    );
    Ok(Html(views::update_page(&UpdatePage {
        old_name: &form.old_name,
        contact: &contact,
        error: Some("Contact not found"),
    }))
    .into_response())
}
