use yew::prelude::*;

const PROFILE_CSS: &str = r#"
    .profile-card {
        border: 1px solid var(--border);
        border-radius: 1rem;
        background: var(--surface);
        padding: 2rem 1.5rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        gap: 0.35rem;
    }
    .profile-card img {
        height: 6rem;
        width: 6rem;
        border-radius: 9999px;
        object-fit: cover;
        margin-bottom: 1rem;
        background: var(--bg);
    }
    .profile-card .profile-name {
        font-size: 1.15rem;
        font-weight: 600;
        margin: 0;
    }
    .profile-card .profile-title {
        color: var(--fg-muted);
        font-size: 0.9rem;
        margin: 0;
    }
    .profile-card .profile-handle {
        font-size: 0.85rem;
        color: var(--fg-muted);
        margin: 0.5rem 0 1rem;
    }
    .profile-card .profile-handle i {
        margin-right: 0.35rem;
    }
    .profile-contact {
        display: inline-block;
        border: 1px solid var(--accent);
        color: var(--accent);
        border-radius: 0.5rem;
        padding: 0.4rem 1.25rem;
        font-size: 0.9rem;
        transition: background 0.2s ease, color 0.2s ease;
    }
    .profile-contact:hover {
        background: var(--accent);
        color: #fff;
    }
"#;

#[derive(Clone, PartialEq)]
pub struct TeamProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub handle: &'static str,
    pub status: &'static str,
    pub contact_text: &'static str,
    pub avatar_url: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub profile: TeamProfile,
}

/// One team member card: avatar, name, role and a contact link pointing at
/// the member's GitHub handle.
#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let profile = &props.profile;
    html! {
        <div class="profile-card">
            <style>{PROFILE_CSS}</style>
            <img src={profile.avatar_url} alt={profile.name} loading="lazy" />
            <p class="profile-name">{profile.name}</p>
            <p class="profile-title">{profile.title}</p>
            <p class="profile-handle">
                <i class="fab fa-github"></i>
                {profile.status}{" \u{b7} @"}{profile.handle}
            </p>
            <a
                class="profile-contact"
                href={format!("https://github.com/{}", profile.handle)}
                target="_blank"
                rel="noopener"
            >
                {profile.contact_text}
            </a>
        </div>
    }
}
