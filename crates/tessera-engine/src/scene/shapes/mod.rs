//! Recording helpers that append common shapes to a [`DrawCmdList`](super::DrawCmdList),
//! producing the same vertex/index patterns an immediate-mode GUI emits.

pub(crate) mod rect;
pub(crate) mod triangle;
