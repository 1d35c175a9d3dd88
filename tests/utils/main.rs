mod datetime;
mod validation;
