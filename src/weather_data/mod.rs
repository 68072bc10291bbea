pub(crate) mod extractor;
