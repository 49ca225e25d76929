mod binary;
mod search;
