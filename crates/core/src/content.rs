//! Validation rules and built-in defaults for the content collections
//! (projects, inquiries, character items).

use crate::error::CoreError;

/// Space categories offered by the admin project form. The column itself is
/// free text, so these are advisory rather than enforced.
pub const PROJECT_CATEGORIES: &[&str] = &["상가", "아파트", "주택", "오피스", "기타"];

/// Area buckets offered by the public contact form.
pub const INQUIRY_AREAS: &[&str] = &["10평 이하", "20평대", "30평대", "40평대", "50평 이상"];

/// Accepted project media types. Defaults to IMAGE when omitted.
pub const MEDIA_TYPES: &[&str] = &["IMAGE", "VIDEO"];
pub const DEFAULT_MEDIA_TYPE: &str = "IMAGE";

/// A built-in character item used to seed an empty collection.
pub struct CharacterSeed {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub sort_order: i32,
}

/// Sample feature blocks installed by the guarded seed operation.
pub const CHARACTER_SEEDS: &[CharacterSeed] = &[
    CharacterSeed {
        title: "Total Solution",
        description: "프로젝트의 시작부터 끝까지, 에이블 케이만의 차별화된 원스톱 솔루션을 제공합니다. 전문적인 컨설팅을 통해 당신의 비전을 현실로 구현합니다. 010.4547.3841",
        image_url: "/images/living_room_luxury_1768900871583.png",
        sort_order: 1,
    },
    CharacterSeed {
        title: "Master Craftsmanship",
        description: "디테일이 완성도를 결정합니다. 엄격한 현장 관리와 타협하지 않는 시공 품질로 완벽한 마감을 약속드립니다.",
        image_url: "/images/kitchen_detail_modern_1768900969359.png",
        sort_order: 2,
    },
    CharacterSeed {
        title: "Color Aesthetics",
        description: "공간에 감성을 불어넣는 전문적인 컬러 큐레이션. 당신의 라이프스타일과 취향을 깊이 있게 해석하여 가장 조화로운 색채를 제안합니다.",
        image_url: "/images/bed_room_cozy_1768901076100.png",
        sort_order: 3,
    },
    CharacterSeed {
        title: "Spatial Curation",
        description: "단순한 인테리어를 넘어선 공간 예술. 구조적 미학과 기능성을 동시에 고려한 독창적인 연출로 시간이 흘러도 변치 않는 가치를 선사합니다.",
        image_url: "/images/living_room_luxury_1768900871583.png",
        sort_order: 4,
    },
];

fn require(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("'{field}' is required")));
    }
    Ok(())
}

/// Validate a new project submission.
pub fn validate_project(title: &str, category: &str, image_url: &str) -> Result<(), CoreError> {
    require("title", title)?;
    require("category", category)?;
    require("image_url", image_url)
}

/// Validate an explicit media type value against [`MEDIA_TYPES`].
pub fn validate_media_type(media_type: &str) -> Result<(), CoreError> {
    if !MEDIA_TYPES.contains(&media_type) {
        return Err(CoreError::Validation(format!(
            "'media_type' must be one of IMAGE, VIDEO (got '{media_type}')"
        )));
    }
    Ok(())
}

/// Validate a public contact-form submission.
pub fn validate_inquiry(name: &str, phone: &str) -> Result<(), CoreError> {
    require("name", name)?;
    require("phone", phone)
}

/// Validate a character item payload (both create and update).
pub fn validate_character_item(
    title: &str,
    description: &str,
    image_url: &str,
) -> Result<(), CoreError> {
    require("title", title)?;
    require("description", description)?;
    require("image_url", image_url)
}
