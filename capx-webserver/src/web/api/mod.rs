use std::{fmt::Display, result};

use capx_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    patch, post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::{guards::*, jwt};
use crate::adapters::json::{self, from_json};
use capx_application::prelude as flows;
use capx_core::{entities::*, usecases};
use capx_db_sqlite::Connections;

mod bugs;
mod error;
mod events;
mod organizations;
mod participations;
mod profiles;
mod skills;
mod users;
mod util;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type CreatedResult<T> = result::Result<(Status, Json<T>), ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_user,
        users::post_login,
        users::post_logout,
        users::get_current_user,
        // ---   events   --- //
        events::get_events,
        events::post_event,
        events::get_event,
        events::put_event,
        events::patch_event,
        events::delete_event,
        // ---   participants   --- //
        participations::get_participations,
        participations::post_participation,
        participations::get_participation,
        participations::put_participation,
        participations::patch_participation,
        participations::delete_participation,
        // ---   organizations of events   --- //
        participations::get_org_participations,
        participations::post_org_participation,
        participations::get_org_participation,
        participations::put_org_participation,
        participations::patch_org_participation,
        participations::delete_org_participation,
        // ---   skills   --- //
        skills::get_skills,
        skills::post_skill,
        skills::get_skill,
        skills::put_skill,
        skills::delete_skill,
        // ---   organizations   --- //
        organizations::get_organizations,
        organizations::post_organization,
        organizations::get_organization,
        organizations::put_organization,
        organizations::delete_organization,
        organizations::get_territories,
        organizations::post_territory,
        organizations::get_languages,
        organizations::post_language,
        organizations::get_wikimedia_projects,
        organizations::post_wikimedia_project,
        // ---   profiles   --- //
        profiles::get_profiles,
        profiles::get_profile,
        profiles::put_profile,
        profiles::delete_profile,
        // ---   bugs   --- //
        bugs::get_bugs,
        bugs::post_bug,
        bugs::get_bug,
        bugs::put_bug,
        bugs::delete_bug,
        bugs::get_attachments,
        bugs::post_attachment,
        bugs::get_attachment,
        bugs::delete_attachment,
        // ---   server   --- //
        util::get_version,
    ]
}

fn created<T>(body: T) -> CreatedResult<T> {
    Ok((Status::Created, Json(body)))
}

fn json_list<T, J: From<T>>(items: Vec<T>) -> Json<Vec<J>> {
    Json(items.into_iter().map(J::from).collect())
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
