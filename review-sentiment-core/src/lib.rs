pub mod cleaner;
pub mod config;
pub mod error;
pub mod language;
pub mod model;
pub mod models;
pub mod normalization;
pub mod postprocess;
pub mod progress;
pub mod report;
pub mod sentiment;
pub mod source;
pub mod spelling;
pub mod stopwords;
pub mod storage;
pub mod translation;
pub mod transliteration;
