// Linkfolio - core/catalog.rs
//
// Built-in catalogue data: the default my-profile record, the fixed
// service-provider directory, and the featured-course rail.
// Core layer: pure construction, never touches the filesystem.

use crate::core::model::{CourseRecord, ProfileRecord, SocialLinks};

/// Identifier of the user's own profile in the built-in default.
pub const MY_PROFILE_ID: &str = "me-123";

// =============================================================================
// Default my-profile
// =============================================================================

/// The my-profile record used until a persisted copy is loaded, and kept
/// when no persisted copy exists.
pub fn default_my_profile() -> ProfileRecord {
    ProfileRecord {
        id: MY_PROFILE_ID.to_string(),
        name: "Karthick".to_string(),
        bio: "Full Stack Developer & UI Enthusiast".to_string(),
        domain: "Software Engineer".to_string(),
        skills: "React Native, Expo, Node.js".to_string(),
        avatar: "asset://avatars/avatar-male-1.png".to_string(),
        color: None,
        links: SocialLinks {
            github: "https://github.com/karthick".to_string(),
            linkedin: "https://linkedin.com/in/karthick".to_string(),
        },
    }
}

// =============================================================================
// Provider directory
// =============================================================================

/// Constructs one directory entry. Directory profiles carry no social
/// links; the fields stay present but empty.
fn provider(
    id: &str,
    name: &str,
    bio: &str,
    domain: &str,
    skills: &str,
    avatar: &str,
    color: &str,
) -> ProfileRecord {
    ProfileRecord {
        id: id.to_string(),
        name: name.to_string(),
        bio: bio.to_string(),
        domain: domain.to_string(),
        skills: skills.to_string(),
        avatar: avatar.to_string(),
        color: Some(color.to_string()),
        links: SocialLinks::default(),
    }
}

/// The fixed, read-only service-provider directory, in display order.
///
/// Constructed once at store creation and never mutated or persisted.
pub fn provider_directory() -> Vec<ProfileRecord> {
    vec![
        provider(
            "1",
            "Joseph Smith",
            "Visual designer specializing in motion UI.",
            "UX Lab: Motion Edition",
            "Figma, After Effects",
            "asset://avatars/avatar-male-1.png",
            "#D49CFF",
        ),
        provider(
            "2",
            "Sarah Chen",
            "Graphic artist and illustrator.",
            "Design Odyssey",
            "Illustration, Branding",
            "asset://avatars/avatar-female-1.png",
            "#D49CFF",
        ),
        provider(
            "3",
            "Alex River",
            "Product manager focusing on developer tools.",
            "Focus Mode",
            "Product Management, Agile",
            "asset://avatars/avatar-male-2.png",
            "#FFB167",
        ),
        provider(
            "4",
            "Emily R.",
            "Full stack web developer.",
            "Web Development",
            "React, Next.js, Node",
            "asset://avatars/avatar-female-1.png",
            "#7C93FF",
        ),
        provider(
            "5",
            "Maksym B.",
            "SEO specialist and digital marketer.",
            "SEO Strategy",
            "Google Ads, Analytics",
            "asset://avatars/avatar-male-2.png",
            "#FFB167",
        ),
    ]
}

// =============================================================================
// Featured courses
// =============================================================================

/// The featured-course rail on the home feed, in display order.
pub fn featured_courses() -> Vec<CourseRecord> {
    vec![
        CourseRecord {
            id: "1".to_string(),
            title: "UX Lab: Motion Edition".to_string(),
            author: "Joseph Smith".to_string(),
            progress: "2/3".to_string(),
            image: "asset://courses/course-ux-design.png".to_string(),
            color: "#D49CFF".to_string(),
        },
        CourseRecord {
            id: "2".to_string(),
            title: "Complete Web Development".to_string(),
            author: "Sarah Chen".to_string(),
            progress: "1/5".to_string(),
            image: "asset://courses/course-web-dev.png".to_string(),
            color: "#7C93FF".to_string(),
        },
        CourseRecord {
            id: "3".to_string(),
            title: "SEO & Digital Marketing".to_string(),
            author: "Alex River".to_string(),
            progress: "0/4".to_string(),
            image: "asset://courses/course-seo-marketing.png".to_string(),
            color: "#FFB167".to_string(),
        },
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn directory_has_five_providers_in_order() {
        let providers = provider_directory();
        assert_eq!(providers.len(), 5);

        let names: Vec<&str> = providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Joseph Smith",
                "Sarah Chen",
                "Alex River",
                "Emily R.",
                "Maksym B."
            ]
        );
    }

    #[test]
    fn ids_are_unique_across_my_profile_and_directory() {
        let mut ids = HashSet::new();
        ids.insert(default_my_profile().id);
        for p in provider_directory() {
            assert!(ids.insert(p.id.clone()), "duplicate id '{}'", p.id);
        }
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn providers_carry_no_social_links() {
        for p in provider_directory() {
            assert_eq!(p.links, crate::core::model::SocialLinks::default());
            assert!(p.color.is_some(), "provider '{}' has no accent", p.id);
        }
    }

    #[test]
    fn default_my_profile_matches_built_in_identity() {
        let me = default_my_profile();
        assert_eq!(me.id, MY_PROFILE_ID);
        assert_eq!(me.name, "Karthick");
        assert_eq!(me.color, None);
        assert!(!me.links.github.is_empty());
    }

    #[test]
    fn course_authors_exist_in_the_directory() {
        let providers = provider_directory();
        for course in featured_courses() {
            assert!(
                providers.iter().any(|p| p.name == course.author),
                "course '{}' author '{}' not in directory",
                course.id,
                course.author
            );
        }
    }

    #[test]
    fn courses_have_well_formed_progress() {
        let courses = featured_courses();
        assert_eq!(courses.len(), 3);
        for course in &courses {
            let (done, total) = course.progress_parts().expect("progress parses");
            assert!(done <= total, "course '{}' progress overflows", course.id);
        }
    }
}
