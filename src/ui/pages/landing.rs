//! Landing page component
//!
//! Single-page studio site:
//! - SEO meta tags
//! - Hero section, optionally typed out character by character
//! - Services carousel with expandable client reviews
//! - Process timeline
//! - Contact details and the contact form
//! - Footer, notification toast and scroll-to-top button

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::carousel::{ServiceCard, ServicesCarousel};
use crate::ui::contact_form::ContactForm;
use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::{AnchorLink, NavBar};
use crate::ui::notifications::NoticeHost;
use crate::ui::scroll_top::ScrollToTop;
use crate::ui::site_config::use_site_config;

const HERO_TITLE: &str = "We build websites that work as hard as you do";

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    // Fade-in needs the whole page in the DOM
    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        crate::ui::reveal::reveal_on_scroll();
    });

    view! {
        <SeoMeta />

        <NavBar />

        <main>
            <HeroSection />
            <ServicesSection />
            <ProcessSection />
            <ContactSection />
        </main>

        <Footer />

        <NoticeHost />
        <ScrollToTop />
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Studio - Web Design & Development" />
        <Meta
            name="description"
            content="Small web studio building fast, accessible websites for local businesses."
        />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Studio - Web Design & Development" />
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let config = use_site_config();
    let title = RwSignal::new(HERO_TITLE.to_string());

    if config.typing_effect {
        let speed_ms = config.typing_speed_ms;
        Effect::new(move |_| {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                use crate::core::Typewriter;

                title.set(String::new());
                for frame in Typewriter::new(HERO_TITLE) {
                    gloo_timers::future::TimeoutFuture::new(speed_ms).await;
                    title.set(frame);
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (title, speed_ms);
        });
    }

    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">{move || title.get()}</h1>
                <p class="hero-subtitle">
                    "Design, development and care for small businesses that want to be found online."
                </p>
                <div class="hero-buttons">
                    <AnchorLink href="#contact" class="btn btn-primary">"Get a Quote"</AnchorLink>
                    <AnchorLink href="#services" class="btn btn-secondary">"Our Services"</AnchorLink>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <h2 class="section-title">"Services"</h2>
                <p class="section-subtitle">"Everything you need to get online and stay there"</p>

                <ServicesCarousel>
                    <ServiceCard
                        icon=icons::CLOCK
                        title="Website Design"
                        summary="Custom layouts built around your brand, responsive on every screen."
                        review="\"They turned a vague idea into a site our customers actually use.\" - Bakery owner"
                    />
                    <ServiceCard
                        icon=icons::MAP_PIN
                        title="Local SEO"
                        summary="Get found by people nearby with search listings that stay current."
                        review="\"Calls doubled within two months of launch.\" - Plumbing contractor"
                    />
                    <ServiceCard
                        icon=icons::MAIL
                        title="Online Booking"
                        summary="Let clients book appointments and get reminders without a phone call."
                        review="\"No more double-booked afternoons.\" - Hair salon"
                    />
                    <ServiceCard
                        icon=icons::PHONE
                        title="Maintenance"
                        summary="Updates, backups and small changes handled for a flat monthly fee."
                        review="\"I send an email and it's done the same day.\" - Dental clinic"
                    />
                </ServicesCarousel>
            </div>
        </section>
    }
}

#[component]
fn ProcessSection() -> impl IntoView {
    view! {
        <section id="process" class="process">
            <div class="container">
                <h2 class="section-title">"How We Work"</h2>
                <div class="timeline">
                    <TimelineItem step=1 title="Discovery" text="A short call to learn about your business and goals." />
                    <TimelineItem step=2 title="Design" text="Mockups you can click through before any code is written." />
                    <TimelineItem step=3 title="Build" text="Development with weekly previews on a staging link." />
                    <TimelineItem step=4 title="Launch" text="Go live, then a month of free tweaks and support." />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(step: u32, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="timeline-item">
            <div class="timeline-number">{step}</div>
            <div class="timeline-content">
                <h3>{title}</h3>
                <p>{text}</p>
            </div>
        </div>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">"Get in Touch"</h2>
                <div class="contact-wrapper">
                    <div class="contact-info">
                        <ContactItem icon=icons::MAIL label="Email" value="hello@studio.example" />
                        <ContactItem icon=icons::PHONE label="Phone" value="(555) 010-2040" />
                        <ContactItem icon=icons::MAP_PIN label="Location" value="Remote, worldwide" />
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactItem(icon: &'static str, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="contact-item">
            <Icon name=icon class="contact-icon" />
            <div>
                <h4>{label}</h4>
                <p>{value}</p>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>"© 2025 Studio. All rights reserved."</p>
            </div>
        </footer>
    }
}
