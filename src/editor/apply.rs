//! Applying edits and their reverts to a card.

use crate::error::EditError;
use crate::format;
use crate::history::{Edit, Revert};
use crate::model::{Author, Card};

/// Run a forward edit, returning what is needed to reverse it
pub(crate) fn apply_edit(card: &mut Card, edit: &Edit) -> Result<Revert, EditError> {
    let revert = match edit {
        Edit::Text { field, text } => {
            let old_text = std::mem::replace(card.text_mut(*field), text.clone());
            Revert::Text {
                field: *field,
                old_text,
            }
        }
        Edit::AddAuthor => {
            let id = card.next_author_id();
            card.authors.push(Author::blank(id));
            Revert::AddAuthor
        }
        Edit::DeleteAuthor { index } => {
            check_author_index(card, *index)?;
            let author = card.authors.remove(*index);
            Revert::DeleteAuthor {
                index: *index,
                author,
            }
        }
        Edit::EditAuthor { index, author } => {
            check_author_index(card, *index)?;
            let old_author = std::mem::replace(&mut card.authors[*index], author.clone());
            Revert::EditAuthor {
                index: *index,
                old_author,
            }
        }
        Edit::EditDate { field, date } => {
            let old_date = std::mem::replace(card.date_mut(*field), date.clone());
            Revert::EditDate {
                field: *field,
                old_date,
            }
        }
        Edit::EditParagraphs { selection, tool } => {
            Revert::EditParagraphs(format::apply_format(&mut card.paras, selection, *tool)?)
        }
        Edit::CondenseParagraphs => Revert::CondenseParagraphs(format::condense(&mut card.paras)),
        Edit::UncondenseParagraphs { chop_points } => {
            let old_paragraphs = card.paras.paragraphs.clone();
            format::uncondense(&mut card.paras, chop_points)?;
            Revert::ReplaceParagraphs { old_paragraphs }
        }
        Edit::ReplaceParagraphs { paragraphs } => {
            let old_paragraphs =
                std::mem::replace(&mut card.paras.paragraphs, paragraphs.clone());
            card.paras.canonicalize();
            Revert::ReplaceParagraphs { old_paragraphs }
        }
    };
    tracing::debug!(kind = ?edit.kind(), "applied edit");
    Ok(revert)
}

/// Reverse a previously applied edit
pub(crate) fn revert_edit(card: &mut Card, revert: &Revert) -> Result<(), EditError> {
    match revert {
        Revert::Text { field, old_text } => {
            *card.text_mut(*field) = old_text.clone();
        }
        Revert::AddAuthor => {
            card.authors.pop();
        }
        Revert::DeleteAuthor { index, author } => {
            let index = (*index).min(card.authors.len());
            card.authors.insert(index, author.clone());
        }
        Revert::EditAuthor { index, old_author } => {
            check_author_index(card, *index)?;
            card.authors[*index] = old_author.clone();
        }
        Revert::EditDate { field, old_date } => {
            *card.date_mut(*field) = old_date.clone();
        }
        Revert::EditParagraphs(change) => format::undo_format(&mut card.paras, change)?,
        Revert::CondenseParagraphs(condensed) => {
            if !condensed.restore(&mut card.paras)? {
                tracing::warn!("condense undo skipped: paragraphs are no longer condensed");
            }
        }
        Revert::ReplaceParagraphs { old_paragraphs } => {
            card.paras.paragraphs = old_paragraphs.clone();
        }
    }
    Ok(())
}

fn check_author_index(card: &Card, index: usize) -> Result<(), EditError> {
    if index < card.authors.len() {
        Ok(())
    } else {
        tracing::warn!(index, authors = card.authors.len(), "author index out of range");
        Err(EditError::InvalidAuthorIndex(index))
    }
}
