//! Fixed public asset paths and the page copy (static right-to-left text).

use crate::inputs::{FieldId, Gender};

pub const PLACEHOLDER_AVATAR: &str = "/Rectangle 1.svg";
pub const UPLOAD_ICON: &str = "/plus-circle.svg";
pub const CALENDAR_ICON: &str = "/Vector.svg";
pub const VISIBILITY_ICON: &str = "/View_hide.svg";

pub const REQUIRED_HINT: &str = "وارد کردن این فیلد اجباری است";
pub const GENDER_LABEL: &str = "جنسیت";
pub const PROMOTIONS_LABEL: &str = "مایل به دریافت پیام های تبلیغاتی هستم";
pub const SAVE_LABEL: &str = "ذخیره";
pub const SAVED_DATA_HEADING: &str = "Saved Data:";

pub fn gender_icon(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "/👩.png",
        Gender::Male => "/👨.png",
    }
}

pub fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "زن",
        Gender::Male => "مرد",
    }
}

pub fn gender_alt(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "Female",
        Gender::Male => "Male",
    }
}

pub fn field_label(field: FieldId) -> &'static str {
    match field {
        FieldId::Name => "نام و نام خانوادگی (نام مستعار)",
        FieldId::Email => "آدرس ایمیل",
        FieldId::Password => "رمز عبور",
        FieldId::ConfirmPassword => "تایید رمز عبور",
        FieldId::Birthdate => "تاریخ تولد",
        FieldId::AcceptPromotions => PROMOTIONS_LABEL,
    }
}

pub fn field_placeholder(field: FieldId) -> &'static str {
    match field {
        FieldId::Name => "نام و نام خانوادگی خود را وارد کنید",
        FieldId::Email => "آدرس ایمیل خود را وارد کنید",
        FieldId::Password => "رمز عبور خود را وارد کنید",
        FieldId::ConfirmPassword => "رمز عبور را تایید کنید",
        FieldId::Birthdate => "تاریخ تولد را وارد کنید",
        FieldId::AcceptPromotions => "",
    }
}
