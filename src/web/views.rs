use crate::domain::Contact;
use crate::helper::{encode_query_value, escape_html};

pub struct UpdatePage<'a> {
    /// Name the form will look the contact up by on submit
    pub old_name: &'a str,
    pub contact: &'a Contact,
    pub error: Option<&'a str>,
}

const NAV: &str = r#"<nav>
  <a href="/">Home</a> |
  <a href="/add">Add</a> |
  <a href="/view">View</a> |
  <a href="/search">Search</a> |
  <a href="/delete">Delete</a>
</nav>"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
        <html lang=\"en\">\n\
        <head>\n\
        <meta charset=\"utf-8\">\n\
        <title>{title} - Contact Book</title>\n\
        </head>\n\
        <body>\n\
        {NAV}\n\
        <h1>{title}</h1>\n\
        {body}\n\
        </body>\n\
        </html>\n"
    )
}

fn error_line(error: Option<&str>) -> String {
    error
        .map(|e| format!("<p class=\"error\">{}</p>\n", escape_html(e)))
        .unwrap_or_default()
}

fn text_input(label: &str, field: &str, value: &str) -> String {
    format!(
        "<label>{label} <input type=\"text\" name=\"{field}\" value=\"{}\"></label><br>\n",
        escape_html(value)
    )
}

pub fn index_page() -> String {
    layout(
        "Contact Book",
        "<p>Keep track of the people you know.</p>\n\
        <ul>\n\
        <li><a href=\"/add\">Add a contact</a></li>\n\
        <li><a href=\"/view\">View all contacts</a></li>\n\
        <li><a href=\"/search\">Search by name</a></li>\n\
        <li><a href=\"/delete\">Delete a contact</a></li>\n\
        </ul>",
    )
}

pub fn add_page() -> String {
    let blank = Contact::default();
    layout("Add Contact", &contact_form("/add", &blank, "Add", None))
}

fn contact_form(action: &str, contact: &Contact, submit: &str, old_name: Option<&str>) -> String {
    let hidden = old_name
        .map(|n| {
            format!(
                "<input type=\"hidden\" name=\"oldName\" value=\"{}\">\n",
                escape_html(n)
            )
        })
        .unwrap_or_default();

    format!(
        "<form method=\"post\" action=\"{action}\">\n{hidden}{}{}{}{}<button type=\"submit\">{submit}</button>\n</form>",
        text_input("Name", "name", &contact.name),
        text_input("Phone", "phone", &contact.phone),
        text_input("Email", "email", &contact.email),
        text_input("Address", "address", &contact.address),
    )
}

pub fn view_page(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return layout("All Contacts", "<p>No contact yet</p>");
    }

    let mut rows = String::new();
    for c in contacts {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
            <td><a href=\"/update?name={}\">Edit</a></td></tr>\n",
            escape_html(&c.name),
            escape_html(&c.phone),
            escape_html(&c.email),
            escape_html(&c.address),
            escape_html(&encode_query_value(&c.name)),
        ));
    }

    let body = format!(
        "<table>\n\
        <tr><th>Name</th><th>Phone</th><th>Email</th><th>Address</th><th></th></tr>\n\
        {rows}</table>"
    );
    layout("All Contacts", &body)
}

/// `result` is the searched name and what it found, `None` before any search.
pub fn search_page(result: Option<(&str, Option<&Contact>)>) -> String {
    let form = "<form method=\"post\" action=\"/search\">\n\
        <label>Name <input type=\"text\" name=\"name\"></label>\n\
        <button type=\"submit\">Search</button>\n\
        </form>";

    let outcome = match result {
        None => String::new(),
        Some((_, Some(c))) => format!(
            "\n<dl>\n\
            <dt>Name</dt><dd>{}</dd>\n\
            <dt>Phone</dt><dd>{}</dd>\n\
            <dt>Email</dt><dd>{}</dd>\n\
            <dt>Address</dt><dd>{}</dd>\n\
            </dl>",
            escape_html(&c.name),
            escape_html(&c.phone),
            escape_html(&c.email),
            escape_html(&c.address),
        ),
        Some((name, None)) => format!("\n<p>No contact found for {}</p>", escape_html(name)),
    };

    layout("Search Contact", &format!("{form}{outcome}"))
}

pub fn delete_page(error: Option<&str>) -> String {
    let body = format!(
        "{}<form method=\"post\" action=\"/delete\">\n\
        <label>Name <input type=\"text\" name=\"name\"></label>\n\
        <button type=\"submit\">Delete</button>\n\
        </form>",
        error_line(error)
    );
    layout("Delete Contact", &body)
}

pub fn update_page(page: &UpdatePage<'_>) -> String {
    let body = format!(
        "{}{}",
        error_line(page.error),
        contact_form("/update", page.contact, "Update", Some(page.old_name))
    );
    layout("Update Contact", &body)
}
