use yew::prelude::*;

use crate::components::deferred::Deferred;
use crate::components::footer::Footer;
use crate::components::gallery::{Gallery, GalleryEntry};
use crate::components::menu::{MenuEntry, ModernMenu, SocialEntry};
use crate::components::particles::Particles;
use crate::components::price_card::PriceCard;
use crate::components::profile_card::{ProfileCard, TeamProfile};
use crate::components::scroll_showcase::ScrollShowcase;
use crate::components::timeline::Timeline;
use crate::content::{ContentBlock, ImageRef, TimelineEntry};

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
    }
    .particles-hero {
        width: 100%;
        height: 100vh;
        position: relative;
    }
    .section-divider {
        border-top: 1px solid var(--border);
    }
    .team-grid {
        max-width: 80rem;
        margin: 0 auto;
        padding: 5rem 1rem;
        display: grid;
        grid-template-columns: 1fr;
        gap: 1.5rem;
        width: 100%;
    }
    @media (min-width: 768px) {
        .team-grid {
            grid-template-columns: repeat(2, 1fr);
            padding: 5rem 2rem;
        }
    }
    @media (min-width: 1024px) {
        .team-grid {
            grid-template-columns: repeat(3, 1fr);
            padding: 5rem 2.5rem;
        }
    }
"#;

const PARTICLE_COLORS: [&str; 3] = ["#ff7a00", "#ff9a3c", "#ff6b00"];

fn menu_items() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            label: "Home",
            href: "/",
        },
        MenuEntry {
            label: "About",
            href: "#about",
        },
        MenuEntry {
            label: "Services",
            href: "#services",
        },
        MenuEntry {
            label: "Contact",
            href: "#contact",
        },
    ]
}

fn social_items() -> Vec<SocialEntry> {
    vec![
        SocialEntry {
            label: "GitHub",
            href: "https://github.com",
        },
        SocialEntry {
            label: "LinkedIn",
            href: "https://linkedin.com",
        },
        SocialEntry {
            label: "Twitter",
            href: "https://twitter.com",
        },
    ]
}

fn gallery_items() -> Vec<GalleryEntry> {
    vec![
        GalleryEntry {
            id: "shadcn-ui",
            title: "shadcn/ui: Building a Modern Component Library",
            description: "Explore how shadcn/ui revolutionized React component libraries by providing a unique approach to component distribution and customization, making it easier for developers to build beautiful, accessible applications.",
            href: "https://ui.shadcn.com",
            image: "https://images.unsplash.com/photo-1551250928-243dc937c49d?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        },
        GalleryEntry {
            id: "tailwind",
            title: "Tailwind CSS: The Utility-First Revolution",
            description: "Discover how Tailwind CSS transformed the way developers style their applications, offering a utility-first approach that speeds up development while maintaining complete design flexibility.",
            href: "https://tailwindcss.com",
            image: "https://images.unsplash.com/photo-1551250928-e4a05afaed1e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        },
        GalleryEntry {
            id: "astro",
            title: "Astro: The All-in-One Web Framework",
            description: "Learn how Astro's innovative 'Islands Architecture' and zero-JS-by-default approach is helping developers build faster websites while maintaining rich interactivity where needed.",
            href: "https://astro.build",
            image: "https://images.unsplash.com/photo-1536735561749-fc87494598cb?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        },
        GalleryEntry {
            id: "react",
            title: "React: Pioneering Component-Based UI",
            description: "See how React continues to shape modern web development with its component-based architecture, enabling developers to build complex user interfaces with reusable, maintainable code.",
            href: "https://react.dev",
            image: "https://images.unsplash.com/photo-1548324215-9133768e4094?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        },
        GalleryEntry {
            id: "nextjs",
            title: "Next.js: The React Framework for Production",
            description: "Explore how Next.js has become the go-to framework for building full-stack React applications, offering features like server components, file-based routing, and automatic optimization.",
            href: "https://nextjs.org",
            image: "https://images.unsplash.com/photo-1550070881-a5d71eda5800?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        },
    ]
}

const STARTUP_TEMPLATES: [ImageRef; 4] = [
    ImageRef {
        src: "https://assets.aceternity.com/templates/startup-1.webp",
        alt: "startup template",
    },
    ImageRef {
        src: "https://assets.aceternity.com/templates/startup-2.webp",
        alt: "startup template",
    },
    ImageRef {
        src: "https://assets.aceternity.com/templates/startup-3.webp",
        alt: "startup template",
    },
    ImageRef {
        src: "https://assets.aceternity.com/templates/startup-4.webp",
        alt: "startup template",
    },
];

const DESIGN_TEMPLATES: [ImageRef; 4] = [
    ImageRef {
        src: "https://assets.aceternity.com/pro/hero-sections.png",
        alt: "hero template",
    },
    ImageRef {
        src: "https://assets.aceternity.com/features-section.png",
        alt: "feature template",
    },
    ImageRef {
        src: "https://assets.aceternity.com/pro/bento-grids.png",
        alt: "bento template",
    },
    ImageRef {
        src: "https://assets.aceternity.com/cards.png",
        alt: "cards template",
    },
];

const CHANGELOG_ITEMS: [&str; 5] = [
    "Card grid component",
    "Startup template Aceternity",
    "Random file upload lol",
    "Himesh Reshammiya Music CD",
    "Salman Bhai Fan Club registrations open",
];

fn timeline_entries() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            title: "2024",
            content: vec![
                ContentBlock::Text(
                    "Built and launched Aceternity UI and Aceternity UI Pro from scratch",
                ),
                ContentBlock::ImageGrid(&STARTUP_TEMPLATES),
            ],
        },
        TimelineEntry {
            title: "Early 2023",
            content: vec![
                ContentBlock::Text(
                    "I usually run out of copy, but when I see content this big, I try to integrate lorem ipsum.",
                ),
                ContentBlock::Text(
                    "Lorem ipsum is for people who are too lazy to write copy. But we are not. Here are some more example of beautiful designs I built.",
                ),
                ContentBlock::ImageGrid(&DESIGN_TEMPLATES),
            ],
        },
        TimelineEntry {
            title: "Changelog",
            content: vec![
                ContentBlock::Text("Deployed 5 new components on Aceternity today"),
                ContentBlock::Checklist(&CHANGELOG_ITEMS),
                ContentBlock::ImageGrid(&DESIGN_TEMPLATES),
            ],
        },
    ]
}

const TEAM: [TeamProfile; 6] = [
    TeamProfile {
        name: "Fabio R Rocha",
        title: "Scrum Master",
        handle: "FabioRoberto-ppt",
        status: "Github",
        contact_text: "Contato",
        avatar_url: "/Fabio.svg",
    },
    TeamProfile {
        name: "Luana Miron",
        title: "Produc Owner",
        handle: "javicodes",
        status: "Github",
        contact_text: "Contato",
        avatar_url: "/Luana.svg",
    },
    TeamProfile {
        name: "Guilherme França",
        title: "Full Stack",
        handle: "GuilhermefDomingues",
        status: "Github",
        contact_text: "Contato",
        avatar_url: "/Guilherme.svg",
    },
    TeamProfile {
        name: "Eduardo Barbosa",
        title: "Full Stack",
        handle: "Xcode-sketcher",
        status: "Github",
        contact_text: "Contato",
        avatar_url: "/Eduardo.svg",
    },
    TeamProfile {
        name: "Erick Isaac",
        title: "Full Stack",
        handle: "javicodes",
        status: "Github",
        contact_text: "Contato",
        avatar_url: "/Erick.svg",
    },
    TeamProfile {
        name: "Felipe Trivia",
        title: "Full Stack",
        handle: "Felipe_Koshimizu",
        status: "Github",
        contact_text: "Contato",
        avatar_url: "/Felipe.svg",
    },
];

const SHOWCASE_IMAGE: &str =
    "https://images.unsplash.com/photo-1551250928-243dc937c49d?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

/// The landing page: a fixed vertical sequence of sections built from the
/// literal data above. Below-the-fold sections mount through `Deferred` so
/// each keeps a layout-stable slot; the order never depends on which slot
/// becomes ready first.
#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer" />

            <div class="particles-hero">
                <Deferred min_height="100vh">
                    <Particles
                        particle_colors={PARTICLE_COLORS.to_vec()}
                        particle_count={600}
                        particle_spread={10.0}
                        speed={0.1}
                        particle_base_size={300.0}
                        move_particles_on_hover={true}
                        alpha_particles={false}
                        disable_rotation={false}
                    />
                </Deferred>
            </div>

            <ModernMenu items={menu_items()} social_items={social_items()} />

            <div class="section-divider"></div>

            <Deferred min_height="40rem">
                <Timeline data={timeline_entries()} />
            </Deferred>

            <div class="section-divider"></div>

            <Deferred min_height="32rem">
                <Gallery items={gallery_items()} />
            </Deferred>

            <div class="section-divider"></div>

            <section id="pricing">
                <Deferred min_height="30rem">
                    <PriceCard />
                </Deferred>
                <Deferred min_height="36rem">
                    <ScrollShowcase
                        src={SHOWCASE_IMAGE}
                        title="Sinout - Plataforma Inovadora"
                        show_gradient={true}
                    />
                </Deferred>

                <div class="team-grid">
                    { for TEAM.iter().map(|profile| html! {
                        <Deferred key={profile.name} min_height="20rem">
                            <ProfileCard profile={profile.clone()} />
                        </Deferred>
                    }) }
                </div>
            </section>

            <div class="section-divider"></div>

            <Deferred min_height="24rem">
                <Footer
                    links={menu_items()
                        .into_iter()
                        .map(|item| (item.label, item.href))
                        .collect::<Vec<_>>()}
                    social_items={social_items()}
                />
            </Deferred>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_grid_has_exactly_six_profiles() {
        assert_eq!(TEAM.len(), 6);
    }

    #[test]
    fn gallery_entries_keep_authored_order_and_copy() {
        let items = gallery_items();
        assert_eq!(
            items.iter().map(|item| item.id).collect::<Vec<_>>(),
            ["shadcn-ui", "tailwind", "astro", "react", "nextjs"],
        );
        assert_eq!(items[0].href, "https://ui.shadcn.com");
        assert!(items[0].title.starts_with("shadcn/ui"));
        assert!(!items[0].description.is_empty());
    }

    #[test]
    fn gallery_entry_ids_are_unique() {
        let items = gallery_items();
        let mut ids: Vec<_> = items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn timeline_entries_keep_chronological_authoring() {
        let entries = timeline_entries();
        assert_eq!(
            entries.iter().map(|entry| entry.title).collect::<Vec<_>>(),
            ["2024", "Early 2023", "Changelog"],
        );
    }

    #[test]
    fn changelog_entry_carries_five_item_checklist() {
        let entries = timeline_entries();
        let changelog = entries
            .iter()
            .find(|entry| entry.title == "Changelog")
            .unwrap();
        let checklist = changelog
            .content
            .iter()
            .find_map(|block| match block {
                ContentBlock::Checklist(items) => Some(items),
                _ => None,
            })
            .unwrap();
        assert_eq!(checklist.len(), 5);
    }

    #[test]
    fn navigation_collections_are_in_display_order() {
        assert_eq!(
            menu_items().iter().map(|item| item.label).collect::<Vec<_>>(),
            ["Home", "About", "Services", "Contact"],
        );
        assert_eq!(
            social_items()
                .iter()
                .map(|item| item.label)
                .collect::<Vec<_>>(),
            ["GitHub", "LinkedIn", "Twitter"],
        );
    }
}
