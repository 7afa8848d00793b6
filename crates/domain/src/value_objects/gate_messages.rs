//! User-visible messages produced by the subscription gate.

pub const LOGIN_REQUIRED: &str = "يجب تسجيل الدخول أولاً";
pub const DESIGNERS_ONLY: &str = "هذه الصفحة مخصصة للمصممين فقط";
pub const DESIGNER_PROFILE_NOT_FOUND: &str = "لم يتم العثور على ملف المصمم";
pub const SUBSCRIPTION_PENDING: &str = "اشتراكك قيد المراجعة. يرجى انتظار موافقة الإدارة";
pub const SUBSCRIPTION_EXPIRED: &str = "انتهت صلاحية اشتراكك. يرجى تجديد الاشتراك للمتابعة";
pub const SUBSCRIPTION_REQUIRED: &str = "يجب الاشتراك للوصول لهذه الصفحة";

pub fn expiring_soon(days_remaining: i64) -> String {
    format!("اشتراكك سينتهي خلال {} أيام", days_remaining)
}

pub fn grace_period_remaining(days_remaining: i64) -> String {
    format!(
        "انتهت صلاحية اشتراكك. يمكنك الوصول لهذه الصفحة لمدة {} أيام أخرى",
        days_remaining
    )
}
