use super::*;
use rocket::{
    data::{Data, ToByteUnit},
    http::ContentType,
};

#[get("/bugs")]
pub fn get_bugs(db: &State<Connections>, auth: Auth) -> Result<Vec<json::Bug>> {
    let actor = auth.actor(db)?;
    Ok(json_list(flows::list_bugs(db, &actor)?))
}

#[post("/bugs", format = "application/json", data = "<new_bug>")]
pub fn post_bug(
    db: &State<Connections>,
    auth: Auth,
    new_bug: JsonResult<json::NewBug>,
) -> CreatedResult<json::Bug> {
    let actor = auth.actor(db)?;
    let new_bug = from_json::new_bug(new_bug?.into_inner());
    let bug = flows::create_bug(db, &actor, new_bug)?;
    created(bug.into())
}

#[get("/bugs/<id>")]
pub fn get_bug(db: &State<Connections>, auth: Auth, id: &str) -> Result<json::Bug> {
    let actor = auth.actor(db)?;
    let bug = flows::get_bug(db, &actor, &id.into())?;
    Ok(Json(bug.into()))
}

#[put("/bugs/<id>", format = "application/json", data = "<update>")]
pub fn put_bug(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
    update: JsonResult<json::BugUpdate>,
) -> Result<json::Bug> {
    let actor = auth.actor(db)?;
    let update = from_json::bug_update(update?.into_inner());
    let bug = flows::update_bug(db, &actor, &id.into(), update)?;
    Ok(Json(bug.into()))
}

#[delete("/bugs/<id>")]
pub fn delete_bug(db: &State<Connections>, auth: Auth, id: &str) -> StatusResult {
    let actor = auth.actor(db)?;
    flows::delete_bug(db, &actor, &id.into())?;
    Ok(Status::NoContent)
}

#[get("/bugs/<id>/attachments")]
pub fn get_attachments(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
) -> Result<Vec<json::Attachment>> {
    let actor = auth.actor(db)?;
    Ok(json_list(flows::attachments_of_bug(db, &actor, &id.into())?))
}

/// Uploads the raw request body as a new attachment.
///
/// At most one byte more than allowed is read, so oversized
/// files are still recognized as such.
#[post("/bugs/<id>/attachments?<file_name>", data = "<data>")]
pub async fn post_attachment(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
    file_name: Option<String>,
    content_type: Option<&ContentType>,
    data: Data<'_>,
) -> CreatedResult<json::Attachment> {
    let actor = auth.actor(db)?;
    let limit = (usecases::MAX_ATTACHMENT_SIZE + 1).bytes();
    let content = data.open(limit).into_bytes().await?.into_inner();
    let new_attachment = usecases::NewAttachment {
        file_name,
        content_type: content_type.map(ToString::to_string),
        content: AttachmentContent(content),
    };
    let attachment = flows::add_attachment(db, &actor, &id.into(), new_attachment)?;
    created(attachment.into())
}

#[get("/attachments/<id>")]
pub fn get_attachment(
    db: &State<Connections>,
    auth: Auth,
    id: &str,
) -> result::Result<(ContentType, Vec<u8>), ApiError> {
    let actor = auth.actor(db)?;
    let (attachment, content) = flows::load_attachment(db, &actor, &id.into())?;
    let content_type = attachment
        .content_type
        .as_deref()
        .and_then(ContentType::parse_flexible)
        .unwrap_or(ContentType::Binary);
    Ok((content_type, content.0))
}

#[delete("/attachments/<id>")]
pub fn delete_attachment(db: &State<Connections>, auth: Auth, id: &str) -> StatusResult {
    let actor = auth.actor(db)?;
    flows::delete_attachment(db, &actor, &id.into())?;
    Ok(Status::NoContent)
}
