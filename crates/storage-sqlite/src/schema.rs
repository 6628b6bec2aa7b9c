// Table and view definitions for the CMHub SQLite database.
// Column names keep the legacy `*_pk` naming of the original schema.

diesel::table! {
    settings (id) {
        id -> Integer,
        name -> Text,
        category_id -> Integer,
        data_type -> Text,
        string_value -> Nullable<Text>,
        text_value -> Nullable<Text>,
        integer_value -> Nullable<BigInt>,
        float_value -> Nullable<Double>,
        timestamp_value -> Nullable<Timestamp>,
    }
}

diesel::table! {
    vendors (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    technologies (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    supported_vendor_tech (id) {
        id -> Integer,
        vendor_pk -> Integer,
        tech_pk -> Integer,
    }
}

diesel::table! {
    cm_file_formats (id) {
        id -> Integer,
        vendor_pk -> Integer,
        tech_pk -> Integer,
        format_name -> Text,
    }
}

diesel::table! {
    vendor_cm_file_formats_map (id) {
        id -> Integer,
        vendor_tech_pk -> Integer,
        format_pk -> Integer,
    }
}

// Read-side views. Diesel treats them as tables; they are never written to.

diesel::table! {
    vw_supported_vendor_tech (pk) {
        pk -> Integer,
        vendor -> Text,
        technology -> Text,
    }
}

diesel::table! {
    vw_vendor_cm_file_formats (pk) {
        pk -> Integer,
        vendor -> Text,
        technology -> Text,
        format_name -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    settings,
    vendors,
    technologies,
    supported_vendor_tech,
    cm_file_formats,
    vendor_cm_file_formats_map,
);
