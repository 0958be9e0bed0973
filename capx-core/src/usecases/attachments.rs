use super::{bugs::get_bug, prelude::*};
use crate::authorization::{
    bug::{authorize, BugAction},
    Actor,
};

pub const MAX_ATTACHMENTS_PER_BUG: usize = 3;

/// 1 MiB
pub const MAX_ATTACHMENT_SIZE: u64 = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct NewAttachment {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub content: AttachmentContent,
}

pub fn add_attachment<R>(
    repo: &R,
    actor: &Actor,
    bug: &Id,
    new_attachment: NewAttachment,
) -> Result<Attachment>
where
    R: BugRepo + AttachmentRepo,
{
    let bug = get_bug(repo, actor, bug)?;
    authorize(actor, BugAction::Attach { bug: &bug })?;
    let NewAttachment {
        file_name,
        content_type,
        content,
    } = new_attachment;
    let size = content.0.len() as u64;
    if size > MAX_ATTACHMENT_SIZE {
        return Err(Error::AttachmentTooLarge);
    }
    if repo.count_attachments_of_bug(&bug.id)? >= MAX_ATTACHMENTS_PER_BUG {
        return Err(Error::TooManyAttachments);
    }
    let attachment = Attachment {
        id: Id::new(),
        bug: bug.id,
        file_name: file_name.filter(|n| !n.trim().is_empty()),
        content_type: content_type.filter(|t| !t.trim().is_empty()),
        size,
        uploaded_at: TimestampMs::now(),
    };
    log::debug!(
        "Attaching {} bytes to bug {}",
        attachment.size,
        attachment.bug
    );
    repo.create_attachment(&attachment, &content)?;
    Ok(attachment)
}

pub fn attachments_of_bug<R>(repo: &R, actor: &Actor, bug: &Id) -> Result<Vec<Attachment>>
where
    R: BugRepo + AttachmentRepo,
{
    let bug = get_bug(repo, actor, bug)?;
    Ok(repo.attachments_of_bug(&bug.id)?)
}

/// Loads the metadata and the raw content of an attachment.
pub fn load_attachment<R>(
    repo: &R,
    actor: &Actor,
    id: &Id,
) -> Result<(Attachment, AttachmentContent)>
where
    R: BugRepo + AttachmentRepo,
{
    let attachment = repo.get_attachment(id)?;
    get_bug(repo, actor, &attachment.bug)?;
    let content = repo.load_attachment_content(id)?;
    Ok((attachment, content))
}

pub fn delete_attachment<R>(repo: &R, actor: &Actor, id: &Id) -> Result<()>
where
    R: BugRepo + AttachmentRepo,
{
    let attachment = repo.get_attachment(id)?;
    get_bug(repo, actor, &attachment.bug)?;
    authorize(actor, BugAction::DeleteAttachment)?;
    repo.delete_attachment(id)?;
    Ok(())
}
