//! Global CSS styles for the PMDE site.
//!
//! Colours come from the palette custom properties in `colors.rs`.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: 'Montserrat', 'Helvetica Neue', Arial, sans-serif;
  background: var(--paper);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

img {
  max-width: 100%;
  display: block;
}

a {
  color: inherit;
  text-decoration: none;
}

.site-main {
  min-height: 70vh;
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 3rem;
  background: var(--forest-deep);
  color: var(--text-on-dark);
}

.nav-logo img {
  height: 44px;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  font-size: 0.9rem;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  padding-bottom: 0.25rem;
  border-bottom: 2px solid transparent;
  transition: border-color 200ms ease;
}

.nav-link:hover,
.nav-link.active {
  border-bottom-color: var(--leaf);
}

.nav-dropdown {
  position: relative;
}

.nav-dropdown-menu {
  display: none;
  position: absolute;
  top: 100%;
  left: 0;
  min-width: 280px;
  padding: 0.75rem 0;
  list-style: none;
  background: var(--forest);
  box-shadow: 0 8px 24px var(--shadow);
}

.nav-dropdown:hover .nav-dropdown-menu,
.nav-dropdown.open .nav-dropdown-menu {
  display: block;
}

.nav-dropdown-menu .nav-link {
  display: block;
  padding: 0.5rem 1.25rem;
  text-transform: none;
}

.nav-toggle {
  display: none;
  background: none;
  border: none;
  color: var(--text-on-dark);
  font-size: 1.75rem;
  cursor: pointer;
}

@media (max-width: 900px) {
  .nav-toggle { display: block; }
  .nav-links { display: none; }
  .nav-links.open {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    padding: 1.5rem 3rem;
    background: var(--forest-deep);
  }
  .nav-dropdown-menu {
    position: static;
    display: block;
    box-shadow: none;
  }
}

/* === Footer === */
.footer {
  background: var(--forest-deep);
  color: var(--text-on-dark);
  padding: 2rem 3rem;
}

.footer .container {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.footer-content {
  display: flex;
  gap: 2rem;
  font-size: 0.85rem;
}

.social-link img {
  width: 28px;
  height: 28px;
}

/* === Parallax Hero === */
.parallax-hero {
  position: relative;
  width: 100%;
  height: 100vh;
  min-height: 560px;
  overflow: hidden;
  background: var(--forest-deep);
}

.hero-background-image,
.hero-middle-image,
.hero-foreground-image {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  pointer-events: none;
  will-change: transform;
}

.hero-text {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  padding: 8rem 6rem;
  color: var(--text-on-dark);
}

.hero-text.text-left { text-align: left; }
.hero-text.text-right { text-align: right; }
.hero-text.text-center { text-align: center; }

.hero-title {
  max-width: 900px;
  font-size: 3.25rem;
  line-height: 1.15;
  font-weight: 700;
  will-change: transform, translate, opacity;
}

.hero-content {
  max-width: 720px;
  margin-top: 1.5rem;
  will-change: transform, translate, opacity;
}

.hero-subtitle {
  font-size: 1.35rem;
  font-weight: 500;
}

.hero-description {
  margin-top: 0.5rem;
  font-size: 1.1rem;
  color: var(--sand);
}

.hero-slide-enter {
  animation: hero-slide-in 600ms ease-out both;
}

@keyframes hero-slide-in {
  from { opacity: 0; transform: translateY(16px); }
  to { opacity: 1; transform: translateY(0); }
}

.hero-dots {
  display: flex;
  gap: 0.6rem;
  margin-top: 2rem;
}

.hero-dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  border: 2px solid var(--text-on-dark);
  background: transparent;
  cursor: pointer;
}

.hero-dot.active {
  background: var(--leaf);
  border-color: var(--leaf);
}

.bottom-icon {
  display: flex;
  justify-content: center;
  margin-top: -48px;
  position: relative;
  z-index: 5;
}

.bottom-icon img {
  width: 96px;
}

/* === Buttons === */
.cta {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.85rem 1.75rem;
  border-radius: 999px;
  font-weight: 600;
  letter-spacing: 0.04em;
  transition: transform 200ms ease, box-shadow 200ms ease;
}

.cta:hover {
  transform: translateY(-2px);
  box-shadow: 0 6px 18px var(--leaf-glow);
}

.cta-arrow {
  transition: transform 200ms ease;
}

.cta:hover .cta-arrow {
  transform: translateX(4px);
}

.cta-primary {
  background: var(--leaf);
  color: var(--paper);
}

.cta-outline {
  border: 2px solid var(--leaf);
  color: var(--leaf);
}

.cta-light {
  background: var(--paper);
  color: var(--forest);
}

.carousel-arrow {
  width: 48px;
  height: 48px;
  border-radius: 50%;
  border: 2px solid var(--leaf);
  background: transparent;
  color: var(--leaf);
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
}

.carousel-arrow:disabled {
  opacity: 0.4;
  cursor: default;
}

.indicator {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  border: none;
  background: var(--sand);
  cursor: pointer;
}

.indicator.active {
  background: var(--leaf);
}

/* === Page Sections === */
.page-section {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 5rem 3rem;
}

.page-section.tinted {
  background: var(--mist);
}

.section-label h1 {
  font-size: 2.25rem;
  color: var(--forest);
  text-align: center;
  padding-bottom: 3rem;
}

.section-copy {
  max-width: 760px;
  text-align: center;
  color: var(--ink-muted);
  margin-bottom: 2rem;
}

.section-image {
  max-width: 960px;
  margin: 2rem auto;
}

.did-you-know {
  display: flex;
  gap: 4rem;
  align-items: center;
  background: var(--forest);
  color: var(--text-on-dark);
}

.did-you-know h1 {
  font-size: 3rem;
  line-height: 1.05;
}

.did-you-know p {
  max-width: 560px;
  margin-bottom: 2rem;
}

.did-you-know p span {
  color: var(--sand);
  font-weight: 600;
}

/* === Services Carousel === */
.services-carousel {
  width: 100%;
  max-width: 960px;
}

.service-slide {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
  padding: 4rem 3rem;
  border-radius: 24px;
  background-color: var(--forest);
  background-repeat: no-repeat;
  background-position: right bottom;
  color: var(--text-on-dark);
  text-align: center;
  opacity: 1;
  transition: opacity 300ms ease-in-out;
}

.service-slide.fade-out { opacity: 0; }
.service-slide.fade-in { opacity: 1; }

.service-icon {
  width: 72px;
  height: 72px;
}

.service-title {
  font-size: 1.75rem;
}

.service-description {
  max-width: 620px;
}

.services-controls {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  margin-top: 2rem;
}

.services-indicators {
  display: flex;
  gap: 0.5rem;
}

/* === Testimonial Carousel === */
.testimonial-carousel {
  width: 100%;
  max-width: 1100px;
  text-align: center;
}

.testimonial-heading {
  font-size: 2rem;
  color: var(--forest);
  margin-bottom: 2.5rem;
}

.testimonial-stage {
  display: flex;
  align-items: center;
  gap: 2rem;
  overflow: hidden;
}

.testimonial-slide {
  flex: 1;
  transform: translateX(0);
  opacity: 1;
  transition: transform 300ms ease-in-out, opacity 300ms ease-in-out;
}

.testimonial-slide.slide-exit-left { transform: translateX(-120px); opacity: 0; }
.testimonial-slide.slide-exit-right { transform: translateX(120px); opacity: 0; }

.testimonial-slide.slide-enter-from-right {
  animation: enter-from-right 300ms ease-out both;
}

.testimonial-slide.slide-enter-from-left {
  animation: enter-from-left 300ms ease-out both;
}

@keyframes enter-from-right {
  from { transform: translateX(120px); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}

@keyframes enter-from-left {
  from { transform: translateX(-120px); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}

.testimonial-text {
  font-size: 1.2rem;
  font-style: italic;
  color: var(--ink);
}

.testimonial-author {
  display: flex;
  flex-direction: column;
  margin-top: 1.5rem;
}

.testimonial-name {
  font-weight: 700;
  color: var(--forest);
}

.testimonial-role {
  font-size: 0.85rem;
  color: var(--ink-muted);
  text-transform: uppercase;
}

.testimonial-indicators {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 2rem;
}

/* === Tab Panel === */
.tab-panel {
  width: 100%;
  max-width: 1200px;
}

.tab-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  justify-content: center;
  margin-bottom: 3rem;
}

.tab-button {
  padding: 0.75rem 1.25rem;
  border: 1px solid var(--leaf);
  border-radius: 999px;
  background: transparent;
  color: var(--forest);
  cursor: pointer;
  transition: background 200ms ease, color 200ms ease;
}

.tab-button.active,
.tab-button:hover {
  background: var(--leaf);
  color: var(--paper);
}

.tab-placeholder {
  text-align: center;
  color: var(--ink-muted);
  padding: 3rem 0;
}

.tab-layout {
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: 3rem;
  transition: opacity 300ms ease-in-out;
}

.tab-layout.fade-in { opacity: 1; }
.tab-layout.fade-out { opacity: 0; }

.tab-left {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
}

.tab-logo-title {
  color: var(--forest);
  text-align: center;
}

.tab-heading {
  font-size: 1.35rem;
  color: var(--forest);
  margin-bottom: 1.25rem;
}

.tab-lead {
  padding-bottom: 1.25rem;
}

.tab-sub-heading {
  padding-top: 1.25rem;
  color: var(--leaf);
}

.subtabs-container {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin: 1.5rem 0;
}

.subtab-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  width: 120px;
  gap: 0.5rem;
  cursor: pointer;
  text-align: center;
  color: var(--ink-muted);
  transition: color 200ms ease;
}

.subtab-item.active {
  color: var(--forest);
  font-weight: 600;
}

.subtab-icon {
  width: 56px;
  height: 56px;
}

.subtab-label {
  font-size: 0.8rem;
}

.extra-image-container {
  margin: 1.5rem 0;
}

.cta-button-container {
  margin-top: 2rem;
}

@media (max-width: 900px) {
  .tab-layout { grid-template-columns: 1fr; }
  .hero-text { padding: 6rem 1.5rem; }
  .hero-title { font-size: 2.25rem; }
}

/* === Contact === */
.contact-section {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  padding: 8rem 3rem 5rem;
  text-align: center;
}

.contact-section h1 {
  color: var(--forest);
  font-size: 2.75rem;
}

.contact-actions {
  display: flex;
  gap: 1rem;
}

/* === Not Found === */
.not-found {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
  padding: 10rem 3rem;
  text-align: center;
}

.not-found h1 {
  font-size: 4rem;
  color: var(--forest);
}

.not-found code {
  color: var(--ink-muted);
}
"#;
