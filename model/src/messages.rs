//! User-facing messages shown by the site scripts.
//!
//! The site is published in Japanese only; these constants are the single
//! place its copy lives.

/// Annotation: a required field is empty.
pub const MSG_REQUIRED: &str = "この項目は必須です。";

/// Annotation: email value does not look like an address.
pub const MSG_INVALID_EMAIL: &str = "有効なメールアドレスを入力してください。";

/// Annotation: telephone value contains characters other than digits and separators.
pub const MSG_INVALID_PHONE: &str = "有効な電話番号を入力してください。";

/// Notification after the contact form passed validation.
pub const MSG_CONTACT_THANKS: &str =
    "お問い合わせありがとうございます。確認後、ご連絡いたします。";

/// Emergency dialog: title.
pub const EMERGENCY_TITLE: &str = "緊急時の対応";

/// Emergency dialog: lead sentence above the symptom list.
pub const EMERGENCY_LEAD: &str = "以下の症状がある場合は、すぐにお電話ください：";

/// Emergency dialog: symptoms that warrant an immediate call.
pub const EMERGENCY_SYMPTOMS: [&str; 5] = [
    "意識がない、ぐったりしている",
    "呼吸が苦しそう",
    "大量出血している",
    "痙攣を起こしている",
    "中毒の可能性がある",
];

/// Emergency dialog: label prefixing the phone number.
pub const EMERGENCY_CONTACT_LABEL: &str = "緊急連絡先：";

/// Emergency dialog: close button.
pub const EMERGENCY_CLOSE: &str = "閉じる";

/// Log label for the service details hook.
pub const LOG_SERVICE_DETAILS: &str = "サービス詳細:";
