pub(crate) use folio::error::Result;
