//! # Staff Commands
//!
//! Renders the staff screen for the terminal.
//!
//! ## Output
//! - Text: a name-ordered table for `list`, one line per notice otherwise
//! - JSON (`--json`): [`StaffDto`] values and notices, camelCase

use serde::Serialize;
use tracing::debug;

use crate::cli::Command;
use crate::error::{ApiError, ErrorCode};
use crate::state::{Notice, StaffScreen};
use resto_core::{CredentialHasher, StaffForm, StaffRecord};

/// Staff DTO for output.
///
/// Never carries the password digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&StaffRecord> for StaffDto {
    fn from(s: &StaffRecord) -> Self {
        StaffDto {
            id: s.id,
            name: s.name.clone(),
            email: s.email.clone(),
            role: s.role_name.clone(),
        }
    }
}

/// Runs one command against the screen and returns what to print.
pub async fn execute<H: CredentialHasher>(
    screen: &mut StaffScreen<H>,
    command: Command,
    json: bool,
) -> Result<String, ApiError> {
    debug!(?command, json, "Executing command");

    match command {
        Command::List => {
            let staff: Vec<StaffDto> = screen.staff().iter().map(StaffDto::from).collect();
            if json {
                to_json(&staff)
            } else {
                Ok(render_table(&staff))
            }
        }
        Command::Show { id } => {
            let dto = screen
                .find(id)
                .map(StaffDto::from)
                .ok_or_else(|| ApiError::not_found("Staff member", id))?;
            if json {
                to_json(&dto)
            } else {
                Ok(render_table(std::slice::from_ref(&dto)))
            }
        }
        Command::Add {
            name,
            email,
            password,
            confirm,
        } => {
            let form = StaffForm::new(name, email, password, confirm);
            let notice = screen.submit(&form).await?;
            render_notice(&notice, json)
        }
        Command::Edit { id, name, email } => {
            let current = screen
                .find(id)
                .ok_or_else(|| ApiError::not_found("Staff member", id))?;
            let name = name.unwrap_or_else(|| current.name.clone());
            let email = email.unwrap_or_else(|| current.email.clone());

            let notice = screen.edit(id, &name, &email).await?;
            render_notice(&notice, json)
        }
        Command::Delete { id } => {
            let notice = screen.delete(id).await?;
            render_notice(&notice, json)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::new(ErrorCode::Internal, format!("Output failed: {}", e)))
}

fn render_notice(notice: &Notice, json: bool) -> Result<String, ApiError> {
    if json {
        to_json(notice)
    } else {
        Ok(notice.message.clone())
    }
}

fn render_table(staff: &[StaffDto]) -> String {
    if staff.is_empty() {
        return "No staff members".to_string();
    }

    let name_width = staff.iter().map(|s| s.name.chars().count()).max().unwrap_or(0).max(4);
    let email_width = staff.iter().map(|s| s.email.chars().count()).max().unwrap_or(0).max(5);

    let mut out = format!(
        "{:>5}  {:<nw$}  {:<ew$}  ROLE",
        "ID",
        "NAME",
        "EMAIL",
        nw = name_width,
        ew = email_width
    );
    for s in staff {
        out.push('\n');
        out.push_str(&format!(
            "{:>5}  {:<nw$}  {:<ew$}  {}",
            s.id,
            s.name,
            s.email,
            s.role,
            nw = name_width,
            ew = email_width
        ));
    }
    out
}
