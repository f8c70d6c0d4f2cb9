pub mod status_record;
