use crate::models::Record;
use std::collections::HashMap;
use std::iter::FusedIterator;
use std::slice;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Lazy, single-pass iterator over pages of an address book.
///
/// Each page holds up to `page_size` summary lines (`name: phone, phone`)
/// in insertion order. Iteration stops after the last non-empty page, so a
/// book whose size is a multiple of the page size yields no trailing empty
/// page. An empty book yields no pages at all.
pub struct Paginator<'a> {
    keys: slice::Iter<'a, String>,
    records: &'a HashMap<String, Record>,
    page_size: usize,
}

impl<'a> Paginator<'a> {
    /// A page size of 0 is treated as 1.
    pub(crate) fn new(
        keys: &'a [String],
        records: &'a HashMap<String, Record>,
        page_size: usize,
    ) -> Self {
        Self {
            keys: keys.iter(),
            records,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Iterator for Paginator<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let records = self.records;
        let page: Vec<String> = self
            .keys
            .by_ref()
            .take(self.page_size)
            .filter_map(|key| records.get(key))
            .map(Record::summary_line)
            .collect();

        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.keys.len().div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl FusedIterator for Paginator<'_> {}
