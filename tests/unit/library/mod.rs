mod entry;
mod search;
