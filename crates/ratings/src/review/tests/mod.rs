mod common;
mod reviewers;
