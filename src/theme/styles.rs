//! Global CSS for the SPACE site.
//!
//! Dark space backdrop with sky, mint and violet accents. Custom properties
//! mirror the constants in [`super::colors`].

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Palette */
  --sky: #4AB1F1;
  --mint: #2AF598;
  --violet: #9D4EDD;
  --whatsapp: #25D366;
  --danger: #ff4d6d;

  /* Backgrounds */
  --space-black: #05070f;
  --space-deep: #0b1020;
  --space-panel: rgba(255, 255, 255, 0.04);
  --space-border: rgba(255, 255, 255, 0.1);

  /* Text */
  --text-primary: #f4f7fb;
  --text-secondary: rgba(244, 247, 251, 0.72);
  --text-muted: rgba(244, 247, 251, 0.5);

  --gradient: linear-gradient(135deg, var(--sky) 0%, var(--mint) 100%);
  --gradient-violet: linear-gradient(135deg, var(--violet) 0%, var(--sky) 100%);

  /* Typography */
  --font-display: 'Space Grotesk', 'Inter', system-ui, sans-serif;
  --font-body: 'Inter', system-ui, -apple-system, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2.25rem;
  --text-3xl: 3.25rem;

  --radius: 16px;
  --radius-sm: 10px;
  --shadow: 0 20px 40px rgba(0, 0, 0, 0.35);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

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
  font-family: var(--font-body);
  background: var(--space-black);
  color: var(--text-primary);
  line-height: 1.65;
  min-height: 100vh;
}

a {
  color: var(--sky);
  text-decoration: none;
}

button {
  font: inherit;
  cursor: pointer;
}

ul { list-style: none; }

.container {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.main-content {
  flex: 1;
  padding-top: 72px;
}

/* === Typography === */
h1, h2, h3, h4 {
  font-family: var(--font-display);
  line-height: 1.2;
}

.gradient-text,
.highlight,
.accent-gradient {
  background: var(--gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.page-title,
.section-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  margin-bottom: 1rem;
}

.section-title { font-size: var(--text-2xl); }

.page-subtitle,
.section-subtitle {
  color: var(--text-secondary);
  font-size: var(--text-lg);
  max-width: 720px;
  margin: 0 auto;
}

/* === Layout === */
.section,
.usp-section,
.services-quick-view,
.featured-projects,
.testimonials,
.story-section,
.values-section,
.team-section,
.trust-section,
.benefits-section,
.workshops-section,
.reviews-section,
.philosophy-section,
.methodology-section,
.quality-section,
.sample-section,
.projects-section,
.portfolio-section {
  padding: 5rem 1.5rem;
  max-width: 1200px;
  margin: 0 auto;
  width: 100%;
}

.section-header,
.featured-header,
.testimonials-header {
  text-align: center;
  margin-bottom: 3rem;
}

.section-badge,
.hero-badge,
.badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.4rem 1rem;
  border-radius: 999px;
  border: 1px solid rgba(74, 177, 241, 0.35);
  background: rgba(74, 177, 241, 0.1);
  color: var(--sky);
  font-size: var(--text-sm);
  margin-bottom: 1.25rem;
}

.page-hero {
  position: relative;
  text-align: center;
  padding: 6rem 1.5rem 4rem;
  background:
    radial-gradient(circle at 20% 20%, rgba(157, 78, 221, 0.18), transparent 45%),
    radial-gradient(circle at 80% 0%, rgba(74, 177, 241, 0.18), transparent 40%),
    var(--space-deep);
  border-bottom: 1px solid var(--space-border);
}

/* === Scroll Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(32px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.reveal.visible {
  opacity: 1;
  transform: none;
}

.fade-left { transform: translateX(-32px); }
.fade-right { transform: translateX(32px); }
.fade-left.visible, .fade-right.visible { transform: none; }

@media (prefers-reduced-motion: reduce) {
  .reveal { opacity: 1; transform: none; transition: none; }
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.85rem 1.6rem;
  border-radius: 999px;
  border: 1px solid transparent;
  font-weight: 600;
  transition: transform var(--transition-fast), box-shadow var(--transition-normal),
    background var(--transition-normal);
}

.btn:hover:not(:disabled) { transform: translateY(-2px); }
.btn:disabled { opacity: 0.6; cursor: not-allowed; }

.btn-primary,
.primary,
.cta-button,
.nav-cta,
.submit-button,
.subscribe-btn,
.send-btn {
  background: var(--gradient);
  color: var(--space-black);
  box-shadow: 0 8px 24px rgba(74, 177, 241, 0.3);
}

.btn-secondary,
.secondary {
  background: transparent;
  border-color: var(--sky);
  color: var(--sky);
}

.btn-whatsapp {
  background: var(--whatsapp);
  color: #fff;
}

.btn-ghost {
  background: var(--space-panel);
  border-color: var(--space-border);
  color: var(--text-primary);
}

.btn-arrow,
.button-arrow,
.cta-arrow { transition: transform var(--transition-fast); }
.btn:hover .btn-arrow,
.btn:hover .button-arrow { transform: translateX(4px); }

.icon-btn {
  display: inline-grid;
  place-items: center;
  line-height: 1;
}

.close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  width: 36px;
  height: 36px;
  border-radius: 50%;
  border: 1px solid var(--space-border);
  background: var(--space-panel);
  color: var(--text-primary);
}

.spinner {
  width: 16px;
  height: 16px;
  border: 2px solid rgba(255, 255, 255, 0.3);
  border-top-color: currentColor;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

/* === Navbar === */
.navbar {
  position: fixed;
  inset: 0 0 auto 0;
  z-index: 100;
  transition: background var(--transition-normal), backdrop-filter var(--transition-normal);
}

.navbar.scrolled {
  background: rgba(5, 7, 15, 0.85);
  backdrop-filter: blur(14px);
  border-bottom: 1px solid var(--space-border);
}

.navbar-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 1rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo,
.mobile-logo {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  font-family: var(--font-display);
  font-weight: 700;
  font-size: var(--text-xl);
  color: var(--text-primary);
}

.logo-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--mint);
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  position: relative;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active { color: var(--text-primary); }

.link-underline {
  position: absolute;
  left: 0;
  bottom: -6px;
  height: 2px;
  width: 0;
  background: var(--gradient);
  transition: width var(--transition-normal);
}

.nav-link:hover .link-underline,
.nav-link.active .link-underline { width: 100%; }

.nav-cta {
  padding: 0.6rem 1.2rem;
  border-radius: 999px;
  font-weight: 600;
}

.hamburger {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
}

.hamburger .line {
  width: 24px;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.hamburger.open .line:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.hamburger.open .line:nth-child(2) { opacity: 0; }
.hamburger.open .line:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

.nav-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.6);
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
  z-index: 90;
}

.nav-overlay.open { opacity: 1; pointer-events: auto; }

.mobile-menu {
  position: fixed;
  top: 0;
  right: 0;
  height: 100vh;
  width: min(320px, 85vw);
  background: var(--space-deep);
  border-left: 1px solid var(--space-border);
  transform: translateX(100%);
  transition: transform var(--transition-normal);
  z-index: 110;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.mobile-menu.open { transform: none; }

.mobile-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.mobile-links {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.mobile-link {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border-radius: var(--radius-sm);
  color: var(--text-secondary);
}

.mobile-link.active,
.mobile-link:hover {
  background: var(--space-panel);
  color: var(--text-primary);
}

.mobile-cta { margin-top: auto; }

/* === Footer === */
.footer {
  background: var(--space-deep);
  border-top: 1px solid var(--space-border);
  padding: 4rem 1.5rem 2rem;
  margin-top: 4rem;
}

.footer-container,
.bottom-container {
  max-width: 1200px;
  margin: 0 auto;
}

.footer-top {
  display: grid;
  grid-template-columns: 1.4fr 2fr 1.2fr;
  gap: 3rem;
}

.footer-description,
.newsletter-text {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  margin: 1rem 0;
}

.links-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.link-title,
.newsletter-title,
.social-title {
  font-size: var(--text-base);
  margin-bottom: 1rem;
}

.link-list { display: flex; flex-direction: column; gap: 0.5rem; }

.footer-link,
.contact-link {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
}

.footer-link:hover,
.contact-link:hover { color: var(--sky); }

.social-links { display: flex; gap: 0.75rem; }

.social-link {
  width: 40px;
  height: 40px;
  border-radius: 50%;
  display: grid;
  place-items: center;
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  transition: border-color var(--transition-fast), transform var(--transition-fast);
}

.social-link:hover { border-color: var(--social-color, var(--sky)); transform: translateY(-2px); }

.newsletter-form,
.chat-form {
  display: flex;
  gap: 0.5rem;
}

.email-input,
.chat-input,
.search-input {
  flex: 1;
  padding: 0.7rem 1rem;
  border-radius: 999px;
  border: 1px solid var(--space-border);
  background: var(--space-panel);
  color: var(--text-primary);
}

.subscribe-btn,
.send-btn {
  border: none;
  border-radius: 999px;
  padding: 0.7rem 1.2rem;
  font-weight: 600;
}

.bottom-bar {
  border-top: 1px solid var(--space-border);
  margin-top: 3rem;
  padding-top: 1.5rem;
}

.bottom-container {
  display: flex;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: 1rem;
}

.copyright { color: var(--text-muted); font-size: var(--text-sm); }
.badges { display: flex; gap: 0.75rem; flex-wrap: wrap; }

/* === Hero === */
.hero-section {
  position: relative;
  min-height: calc(100vh - 72px);
  display: flex;
  align-items: center;
  overflow: hidden;
}

.background-effects { position: absolute; inset: 0; pointer-events: none; }

.gradient-orb {
  position: absolute;
  border-radius: 50%;
  filter: blur(80px);
  opacity: 0.35;
  animation: drift 18s ease-in-out infinite alternate;
}

.orb-1 { width: 420px; height: 420px; background: var(--sky); top: -120px; left: -80px; }
.orb-2 { width: 360px; height: 360px; background: var(--violet); bottom: -120px; right: -60px; }
.orb-3 { width: 260px; height: 260px; background: var(--mint); top: 40%; left: 45%; }

@keyframes drift { to { transform: translate(40px, -30px) scale(1.08); } }

.grid-pattern {
  position: absolute;
  inset: 0;
  background-image:
    linear-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px),
    linear-gradient(90deg, rgba(255, 255, 255, 0.03) 1px, transparent 1px);
  background-size: 48px 48px;
}

.hero-container {
  position: relative;
  max-width: 1200px;
  margin: 0 auto;
  padding: 4rem 1.5rem;
  display: grid;
  grid-template-columns: 1.2fr 1fr;
  gap: 3rem;
  align-items: center;
}

.headline { font-size: clamp(2.4rem, 5vw, 4rem); font-weight: 700; }
.headline-top, .headline-bottom { display: block; }

.headline-main {
  display: inline-block;
  background: var(--gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.headline-main.fading { opacity: 0; transform: translateY(-10px); }

.sub-headline,
.tagline {
  color: var(--text-secondary);
  font-size: var(--text-lg);
  margin: 1.25rem 0 2rem;
}

.cta-group,
.cta-buttons {
  display: flex;
  gap: 1rem;
  flex-wrap: wrap;
}

.cta-section .cta-buttons,
.cta-banner .cta-buttons { justify-content: center; }

.trust-indicators {
  display: flex;
  gap: 1.5rem;
  margin-top: 2.5rem;
  flex-wrap: wrap;
}

.indicator {
  display: flex;
  gap: 0.75rem;
  align-items: center;
}

.indicator-icon { font-size: 1.5rem; }
.indicator-content { display: flex; flex-direction: column; }
.indicator-value { font-weight: 700; font-size: var(--text-lg); }
.indicator-label { color: var(--text-muted); font-size: var(--text-xs); }

.hero-visual {
  position: relative;
  aspect-ratio: 1;
  display: grid;
  place-items: center;
}

.tech-orbit {
  position: relative;
  width: 100%;
  height: 100%;
  border: 1px dashed var(--space-border);
  border-radius: 50%;
  animation: spin 40s linear infinite;
}

.orbit-center {
  position: absolute;
  inset: 35%;
  border-radius: 50%;
  background: var(--gradient-violet);
  display: grid;
  place-items: center;
  font-size: 2.5rem;
  box-shadow: 0 0 60px rgba(157, 78, 221, 0.5);
}

.tech-icon {
  position: absolute;
  width: 56px;
  height: 56px;
  border-radius: 50%;
  display: grid;
  place-items: center;
  background: var(--space-deep);
  border: 1px solid var(--space-border);
  font-size: 1.5rem;
}

.scroll-indicator {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
}

.scroll-mouse {
  width: 26px;
  height: 42px;
  border: 2px solid var(--text-muted);
  border-radius: 14px;
  display: flex;
  justify-content: center;
}

.scroll-wheel {
  width: 4px;
  height: 8px;
  margin-top: 8px;
  border-radius: 2px;
  background: var(--sky);
  animation: wheel 1.6s ease-in-out infinite;
}

@keyframes wheel { to { transform: translateY(12px); opacity: 0; } }

/* === Cards === */
.feature-card,
.usp-card,
.service-card,
.project-card,
.workshop-card,
.domain-card,
.philosophy-card,
.trust-card,
.tool-card,
.info-card,
.step-card,
.visual-card,
.review-card,
.case-study,
.card-block {
  position: relative;
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-radius: var(--radius);
  padding: 1.75rem;
  transition: transform var(--transition-normal), border-color var(--transition-normal),
    box-shadow var(--transition-normal);
}

.feature-card:hover,
.service-card:hover,
.project-card:hover,
.workshop-card:hover,
.domain-card:hover,
.tool-card:hover,
.info-card:hover,
.case-study.active {
  transform: translateY(-6px);
  border-color: rgba(74, 177, 241, 0.45);
  box-shadow: var(--shadow);
}

.feature-icon,
.usp-icon,
.service-icon,
.card-icon,
.domain-icon,
.tool-icon,
.step-icon,
.contact-icon {
  font-size: 2rem;
  margin-bottom: 1rem;
}

.feature-title,
.usp-title,
.card-title,
.project-title {
  font-size: var(--text-xl);
  margin-bottom: 0.5rem;
}

.feature-description,
.usp-description,
.card-description,
.project-description,
.desc {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.usp-grid,
.card-grid,
.services-grid,
.projects-grid,
.workshops-grid,
.domain-grid,
.philosophy-grid,
.trust-grid,
.tools-grid,
.team-grid,
.sample-grid,
.info-cards,
.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.5rem;
}

.stats-grid,
.usp-stats { grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); }

.stat-item,
.stat,
.quick-stat {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: 0.25rem;
}

.quick-stats {
  display: flex;
  justify-content: center;
  gap: 2.5rem;
  margin-top: 2rem;
  flex-wrap: wrap;
}

.stat-number,
.stat-num,
.stat-value,
.trust-number {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--mint);
}

.stat-label { color: var(--text-muted); font-size: var(--text-sm); }
.stat-icon { font-size: 1.25rem; }

.star-rating { color: #ffc857; letter-spacing: 2px; }

.tags,
.tools,
.member-skills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin: 1rem 0;
}

.tag,
.tool-tag,
.skill-tag,
.category-tag {
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  border: 1px solid var(--accent-color, var(--space-border));
  color: var(--accent-color, var(--text-secondary));
  background: rgba(255, 255, 255, 0.03);
}

.detail-list,
.feature-list {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  margin: 1rem 0;
}

.detail-list li,
.feature-list li {
  display: flex;
  gap: 0.5rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.check-icon { color: var(--mint); }

.popular-badge,
.featured-badge,
.service-badge,
.feature-badge,
.delivery-badge,
.rating-badge,
.popular-tag,
.category-badge {
  display: inline-block;
  padding: 0.2rem 0.7rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 600;
  background: rgba(157, 78, 221, 0.2);
  color: #e0c3ff;
}

.popular-badge,
.featured-badge {
  position: absolute;
  top: 1rem;
  right: 1rem;
  background: var(--gradient);
  color: var(--space-black);
}

.feature-card,
.card-front,
.testimonial-card { border-top: 3px solid var(--card-color, var(--space-border)); }

.card-back { background: var(--card-gradient, var(--gradient-violet)); }

/* === Filter Pills === */
.filter-pills {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 2.5rem;
}

.pill {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.55rem 1.2rem;
  border-radius: 999px;
  border: 1px solid var(--space-border);
  background: var(--space-panel);
  color: var(--text-secondary);
  transition: all var(--transition-fast);
}

.pill.active,
.pill:hover {
  border-color: var(--sky);
  color: var(--text-primary);
  background: rgba(74, 177, 241, 0.15);
}

.pill-icon { font-size: 1rem; }

/* === Services Quick View === */
.view-toggle {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-bottom: 2rem;
}

.toggle-icon { margin-right: 0.35rem; }

.carousel-wrapper {
  overflow: hidden;
  mask-image: linear-gradient(90deg, transparent, #000 8%, #000 92%, transparent);
}

.carousel-track {
  display: flex;
  gap: 1.5rem;
  width: max-content;
  will-change: transform;
}

.carousel-track .service-card { width: 300px; flex-shrink: 0; }

.service-card {
  perspective: 1000px;
  min-height: 320px;
  padding: 0;
  cursor: pointer;
}

.card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  min-height: 320px;
  transition: transform var(--transition-slow);
  transform-style: preserve-3d;
}

.service-card.flipped .card-inner { transform: rotateY(180deg); }

.card-front,
.card-back {
  position: absolute;
  inset: 0;
  padding: 1.75rem;
  backface-visibility: hidden;
  display: flex;
  flex-direction: column;
}

.card-back {
  transform: rotateY(180deg);
  border-radius: var(--radius);
}

.back-icon { font-size: 2rem; }
.back-title { margin: 0.75rem 0; }
.back-description { font-size: var(--text-sm); }

.flip-prompt,
.tap-hint {
  margin-top: auto;
  color: var(--text-muted);
  font-size: var(--text-xs);
}

.quick-view-cta,
.featured-cta,
.services-cta { text-align: center; margin-top: 3rem; }

/* === Featured Projects === */
.project-card { padding: 0; overflow: hidden; }

.image-wrapper,
.project-image {
  position: relative;
  height: 220px;
  background-size: cover;
  background-position: center;
  overflow: hidden;
}

.image-wrapper img { width: 100%; height: 100%; object-fit: cover; }

.image-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  background: rgba(5, 7, 15, 0.75);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.project-card:hover .image-overlay { opacity: 1; }

.overlay-btn,
.ask-btn,
.details-btn {
  padding: 0.5rem 1rem;
  border-radius: 999px;
  border: 1px solid var(--sky);
  background: rgba(5, 7, 15, 0.6);
  color: var(--text-primary);
  font-size: var(--text-sm);
}

.project-content { padding: 1.5rem; }
.project-footer { display: flex; justify-content: space-between; align-items: center; }
.project-meta { color: var(--text-muted); font-size: var(--text-xs); margin-bottom: 0.5rem; }
.project-subtitle { color: var(--sky); margin-bottom: 0.75rem; }
.impact { color: var(--mint); font-weight: 600; font-size: var(--text-sm); }

.impact-badge {
  position: absolute;
  bottom: 1rem;
  right: 1rem;
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  padding: 0.5rem 0.9rem;
  border-radius: var(--radius-sm);
  background: rgba(5, 7, 15, 0.8);
}

.impact-value { font-weight: 700; color: var(--mint); }
.impact-label { font-size: var(--text-xs); color: var(--text-muted); }

.category-badge { position: absolute; top: 1rem; left: 1rem; }

.case-study {
  display: grid;
  grid-template-columns: 1fr 1.3fr;
  gap: 0;
  padding: 0;
  overflow: hidden;
  margin-bottom: 2.5rem;
}

.case-study .project-image { height: 100%; min-height: 320px; }
.case-study .project-content { padding: 2rem; }

.accent-line {
  position: absolute;
  left: 0;
  bottom: 0;
  height: 3px;
  width: 0;
  transition: width var(--transition-slow);
}

.case-study.active .accent-line { width: 100%; }

/* === Testimonials === */
.testimonial-stats {
  display: flex;
  justify-content: center;
  gap: 3rem;
  margin-top: 1.5rem;
}

.card-stack {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
}

.stack-container {
  position: relative;
  width: min(560px, 90vw);
  height: 340px;
  perspective: 1200px;
}

.testimonial-card {
  position: absolute;
  inset: 0;
  padding: 2rem;
  border-radius: var(--radius);
  background: var(--space-deep);
  border: 1px solid var(--space-border);
  display: flex;
  flex-direction: column;
  transition: transform var(--transition-slow), opacity var(--transition-slow);
  cursor: pointer;
}

.testimonial-card.active { z-index: 3; box-shadow: var(--shadow); }
.testimonial-card.prev { transform: translateX(-14%) scale(0.9); opacity: 0.45; z-index: 2; }
.testimonial-card.next { transform: translateX(14%) scale(0.9); opacity: 0.45; z-index: 2; }
.testimonial-card.hidden { opacity: 0; pointer-events: none; transform: scale(0.8); }
.testimonial-card.flip-next { animation: flip-next 600ms ease; }
.testimonial-card.flip-prev { animation: flip-prev 600ms ease; }

@keyframes flip-next { 50% { transform: rotateY(-90deg); } }
@keyframes flip-prev { 50% { transform: rotateY(90deg); } }

.quote-icon {
  font-size: 3rem;
  line-height: 1;
  color: var(--violet);
}

.review,
.review-text {
  color: var(--text-secondary);
  font-style: italic;
  margin: 1rem 0;
  flex: 1;
}

.client-info {
  display: flex;
  gap: 1rem;
  align-items: center;
}

.client-avatar,
.review-avatar,
.member-initial,
.chat-avatar,
.msg-avatar {
  width: 48px;
  height: 48px;
  border-radius: 50%;
  display: grid;
  place-items: center;
  background: var(--gradient-violet);
  font-weight: 700;
  flex-shrink: 0;
}

.client-name { font-size: var(--text-base); }
.client-role,
.review-role,
.review-context { color: var(--text-muted); font-size: var(--text-xs); }
.project-tag { font-size: var(--text-xs); color: var(--sky); }

.nav-btn {
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: 1px solid var(--space-border);
  background: var(--space-panel);
  color: var(--text-primary);
}

.carousel-dots,
.carousel-controls {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 0.5rem;
  margin-top: 1.5rem;
}

.dot {
  width: 10px;
  height: 10px;
  border-radius: 999px;
  border: none;
  background: var(--space-border);
  transition: width var(--transition-normal), background var(--transition-normal);
}

.dot.active { width: 28px; background: var(--sky); }

/* === CTA Banner === */
.cta-banner,
.cta-section,
.corporate-cta,
.whatsapp-cta {
  max-width: 1100px;
  margin: 4rem auto;
  padding: 3.5rem 2rem;
  border-radius: calc(var(--radius) * 1.5);
  text-align: center;
  background:
    radial-gradient(circle at 0% 0%, rgba(42, 245, 152, 0.18), transparent 50%),
    radial-gradient(circle at 100% 100%, rgba(157, 78, 221, 0.25), transparent 50%),
    var(--space-deep);
  border: 1px solid var(--space-border);
}

.cta-title { font-size: var(--text-2xl); margin-bottom: 1rem; }
.cta-subtitle,
.cta-footnote { color: var(--text-secondary); margin-bottom: 1.5rem; }

.cta-features {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 1rem 2rem;
  margin: 1.5rem 0;
  color: var(--text-secondary);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: grid;
  place-items: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.7);
  backdrop-filter: blur(6px);
}

.modal {
  position: relative;
  width: min(560px, 100%);
  max-height: 90vh;
  overflow-y: auto;
  padding: 2rem;
  border-radius: var(--radius);
  background: var(--space-deep);
  border: 1px solid var(--space-border);
  box-shadow: var(--shadow);
}

.modal-header { text-align: center; margin-bottom: 1.5rem; }
.modal-header p { color: var(--text-secondary); font-size: var(--text-sm); }
.whatsapp-icon { font-size: 2.5rem; }

.alternate-contact {
  margin-top: 1.5rem;
  padding-top: 1.5rem;
  border-top: 1px solid var(--space-border);
  text-align: center;
}

.alternate-buttons {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  margin-top: 0.75rem;
}

.alternate-buttons button,
.email-link {
  padding: 0.5rem 1rem;
  border-radius: 999px;
  border: 1px solid var(--space-border);
  background: var(--space-panel);
  color: var(--text-primary);
  font-size: var(--text-sm);
}

.status-message {
  margin-top: 1rem;
  padding: 0.75rem 1rem;
  border-radius: var(--radius-sm);
  font-size: var(--text-sm);
}

.status-message.success { background: rgba(42, 245, 152, 0.12); color: var(--mint); }
.status-message.error { background: rgba(255, 77, 109, 0.12); color: var(--danger); }

/* === Forms === */
.contact-form,
.quote-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.form-row,
.form-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.form-label { font-size: var(--text-sm); font-weight: 600; }

.form-input,
.form-select,
.form-textarea {
  width: 100%;
  padding: 0.8rem 1rem;
  border-radius: var(--radius-sm);
  border: 1px solid var(--space-border);
  background: rgba(255, 255, 255, 0.03);
  color: var(--text-primary);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-input:focus,
.form-select:focus,
.form-textarea:focus {
  outline: none;
  border-color: var(--sky);
  box-shadow: 0 0 0 3px rgba(74, 177, 241, 0.2);
}

.form-select option { background: var(--space-deep); }

.error { border-color: var(--danger) !important; }
.error-message { color: var(--danger); font-size: var(--text-xs); }
.char-counter { color: var(--text-muted); font-size: var(--text-xs); align-self: flex-end; }
.form-note { color: var(--text-muted); font-size: var(--text-xs); text-align: center; }

/* === Contact Page === */
.quick-contact {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  margin-top: 2rem;
  flex-wrap: wrap;
}

.quick-contact-btn {
  padding: 0.65rem 1.25rem;
  border-radius: 999px;
  border: 1px solid var(--space-border);
  background: var(--space-panel);
  color: var(--text-primary);
}

.contact-content {
  max-width: 1200px;
  margin: 0 auto;
  padding: 4rem 1.5rem;
  display: grid;
  grid-template-columns: 1.2fr 1fr;
  gap: 2.5rem;
}

.form-container,
.info-container {
  padding: 2rem;
  border-radius: var(--radius);
  background: var(--space-panel);
  border: 1px solid var(--space-border);
}

.form-header,
.info-header { margin-bottom: 1.5rem; }
.form-header p,
.info-header p { color: var(--text-secondary); font-size: var(--text-sm); }

.info-cards { grid-template-columns: repeat(2, 1fr); }
.card-detail { color: var(--text-secondary); font-size: var(--text-sm); margin: 0.5rem 0; }
.card-note { color: var(--text-muted); font-size: var(--text-xs); }
.card-actions { display: flex; gap: 0.5rem; }

.card-action,
.card-action-small {
  background: none;
  border: none;
  color: var(--sky);
  font-size: var(--text-sm);
  padding: 0;
}

.whatsapp-cta {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin: 2rem 0 0;
  padding: 1.5rem;
  text-align: left;
}

.whatsapp-content { display: flex; gap: 1rem; align-items: center; }

/* === Quote Wizard === */
.quote-progress { max-width: 640px; margin: 2.5rem auto 0; }

.progress-bar {
  height: 6px;
  border-radius: 999px;
  background: var(--space-border);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: var(--gradient);
  transition: width var(--transition-slow);
}

.progress-steps {
  display: flex;
  justify-content: space-between;
  margin-top: 1rem;
}

.progress-step {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.35rem;
  color: var(--text-muted);
}

.step-number {
  width: 36px;
  height: 36px;
  border-radius: 50%;
  display: grid;
  place-items: center;
  border: 1px solid var(--space-border);
  background: var(--space-deep);
  font-weight: 700;
}

.progress-step.active { color: var(--text-primary); }
.progress-step.active .step-number { border-color: var(--sky); box-shadow: 0 0 0 4px rgba(74, 177, 241, 0.2); }
.progress-step.completed .step-number { background: var(--mint); color: var(--space-black); border-color: var(--mint); }
.step-label { font-size: var(--text-xs); }

.quote-form-container {
  max-width: 820px;
  margin: 3rem auto;
  padding: 0 1.5rem;
}

.form-step {
  padding: 2rem;
  border-radius: var(--radius);
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.step-header { margin-bottom: 0.5rem; }
.step-title { display: flex; align-items: center; gap: 0.6rem; font-size: var(--text-xl); }
.step-title .step-icon { margin: 0; font-size: 1.5rem; }
.step-subtitle { color: var(--text-secondary); font-size: var(--text-sm); }

.price-estimate {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  padding: 1rem 1.25rem;
  border-radius: var(--radius-sm);
  border: 1px solid rgba(42, 245, 152, 0.35);
  background: rgba(42, 245, 152, 0.08);
}

.estimate-label { font-size: var(--text-sm); color: var(--text-secondary); }
.estimate-value { font-size: var(--text-xl); font-weight: 700; color: var(--mint); }
.estimate-note { font-size: var(--text-xs); color: var(--text-muted); }

.upload-area {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.35rem;
  padding: 2rem;
  border: 2px dashed var(--space-border);
  border-radius: var(--radius-sm);
  color: var(--text-secondary);
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.upload-area:hover { border-color: var(--sky); }
.upload-icon { font-size: 2rem; }
.upload-hint { font-size: var(--text-xs); color: var(--text-muted); }
.file-input { display: none; }

.uploaded-file {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border-radius: var(--radius-sm);
  background: rgba(74, 177, 241, 0.08);
}

.file-name { flex: 1; word-break: break-all; }
.file-size { color: var(--text-muted); font-size: var(--text-xs); }

.remove-file {
  border: none;
  background: none;
  color: var(--danger);
}

.review-card {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.review-item {
  display: grid;
  grid-template-columns: 200px 1fr;
  gap: 1rem;
  padding-bottom: 0.75rem;
  border-bottom: 1px solid var(--space-border);
}

.review-label { color: var(--text-muted); font-size: var(--text-sm); }
.review-value { white-space: pre-wrap; word-break: break-word; }

.form-navigation {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
}

.form-navigation .btn:last-child { margin-left: auto; }

.success-container {
  max-width: 640px;
  margin: 6rem auto;
  padding: 3rem 2rem;
  text-align: center;
}

.checkmark-circle {
  width: 96px;
  height: 96px;
  margin: 0 auto 2rem;
  border-radius: 50%;
  display: grid;
  place-items: center;
  font-size: 3rem;
  background: var(--gradient);
  color: var(--space-black);
  animation: pop 500ms ease;
}

@keyframes pop { from { transform: scale(0.4); opacity: 0; } }

.success-message { color: var(--text-secondary); margin: 1rem 0 2rem; }
.success-details { display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 2rem; }
.success-info { color: var(--text-secondary); }
.success-actions { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; }

/* === Services Page === */
.search-container {
  position: relative;
  max-width: 520px;
  margin: 2rem auto 0;
  display: flex;
  align-items: center;
}

.search-icon { position: absolute; left: 1rem; }
.search-input { padding-left: 2.75rem; }

.clear-search,
.clear-filters {
  position: absolute;
  right: 0.75rem;
  background: none;
  border: none;
  color: var(--text-muted);
}

.clear-filters { position: static; color: var(--sky); }

.content-wrapper {
  max-width: 1280px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
  display: grid;
  grid-template-columns: 260px 1fr;
  gap: 2rem;
}

.sidebar-nav {
  align-self: start;
  padding: 1.25rem;
  border-radius: var(--radius);
  background: var(--space-panel);
  border: 1px solid var(--space-border);
}

.sidebar-nav.sticky { position: sticky; top: 96px; }
.sidebar-header { font-size: var(--text-sm); color: var(--text-muted); margin-bottom: 1rem; }

.sidebar-link {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  width: 100%;
  padding: 0.6rem 0.75rem;
  border: none;
  border-radius: var(--radius-sm);
  background: none;
  color: var(--text-secondary);
  text-align: left;
}

.sidebar-link:hover { background: rgba(74, 177, 241, 0.1); color: var(--text-primary); }
.sidebar-link-content { display: flex; flex-direction: column; }
.sidebar-link-title { font-size: var(--text-sm); }
.sidebar-link-price { font-size: var(--text-xs); color: var(--mint); }

.services-main { display: flex; flex-direction: column; gap: 2rem; }
.results-info { display: flex; justify-content: space-between; align-items: center; }
.results-text,
.service-count { color: var(--text-muted); font-size: var(--text-sm); }

.card-header { display: flex; gap: 1rem; align-items: flex-start; }
.title-content { flex: 1; }

.card-details-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 1.5rem;
}

.detail-column h4 { font-size: var(--text-sm); margin-bottom: 0.5rem; color: var(--text-muted); }

.price-section,
.card-footer {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
  flex-wrap: wrap;
  margin-top: 1.5rem;
}

.price,
.price-tag { font-weight: 700; color: var(--mint); }
.price-label { font-size: var(--text-xs); color: var(--text-muted); }

.service-testimonial {
  margin-top: 1rem;
  padding: 1rem;
  border-left: 3px solid var(--violet);
  color: var(--text-secondary);
  font-style: italic;
  font-size: var(--text-sm);
}

.comparison-button { align-self: flex-end; }

.table-wrapper { overflow-x: auto; }

.comparison-table {
  width: 100%;
  border-collapse: collapse;
  font-size: var(--text-sm);
}

.comparison-table th,
.comparison-table td {
  padding: 0.75rem 1rem;
  text-align: left;
  border-bottom: 1px solid var(--space-border);
}

.table-popular { color: var(--mint); }

.empty-state {
  text-align: center;
  padding: 4rem 1rem;
  color: var(--text-secondary);
}

.empty-icon { font-size: 3rem; margin-bottom: 1rem; }

/* === Workshops === */
.workshop-card.wide { grid-column: span 2; }

.meta-info {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  color: var(--text-muted);
  font-size: var(--text-xs);
  margin: 0.5rem 0 1rem;
}

.participants,
.next-batch { font-size: var(--text-xs); color: var(--text-secondary); }

.review-carousel { max-width: 720px; margin: 0 auto; }
.review-header { display: flex; gap: 1rem; align-items: center; }
.review-info { display: flex; flex-direction: column; }

/* === About === */
.story-section {
  display: grid;
  grid-template-columns: 1.3fr 1fr;
  gap: 3rem;
  align-items: center;
}

.story-text p { color: var(--text-secondary); margin-bottom: 1rem; }
.story-highlight { color: var(--mint); font-weight: 600; }
.story-visual { display: grid; gap: 1rem; }

.member-image,
.member-photo {
  width: 120px;
  height: 120px;
  margin: 0 auto 1rem;
  border-radius: 50%;
  object-fit: cover;
}

.member-initial { width: 120px; height: 120px; font-size: 2.5rem; margin: 0 auto 1rem; }
.member-content { text-align: center; }
.member-name { font-size: var(--text-lg); }
.member-role { color: var(--sky); font-size: var(--text-sm); }
.member-bio,
.member-expertise { color: var(--text-secondary); font-size: var(--text-sm); margin-top: 0.75rem; }

/* === IEEE Support === */
.timeline {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  padding-left: 2rem;
  border-left: 2px solid var(--space-border);
}

.step-card.active { border-color: var(--violet); }
.step-duration,
.total-duration { color: var(--mint); font-size: var(--text-sm); }
.total-duration { text-align: center; margin-top: 1.5rem; }
.tool-category { color: var(--text-muted); font-size: var(--text-xs); }
.tool-name { font-weight: 600; }

.sample-placeholder {
  display: grid;
  place-items: center;
  height: 180px;
  border-radius: var(--radius);
  border: 1px dashed var(--space-border);
}

.placeholder-icon { font-size: 2.5rem; }
.sample-note { color: var(--text-muted); font-size: var(--text-sm); text-align: center; margin-top: 1.5rem; }

/* === Chat Widget === */
.ai-toggle {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 150;
  width: 60px;
  height: 60px;
  border-radius: 50%;
  border: none;
  background: var(--gradient-violet);
  font-size: 1.6rem;
  box-shadow: var(--shadow);
}

.ai-icon { position: relative; z-index: 1; }

.ai-pulse {
  position: absolute;
  inset: 0;
  border-radius: 50%;
  border: 2px solid var(--violet);
  animation: pulse 2s ease-out infinite;
}

@keyframes pulse { to { transform: scale(1.5); opacity: 0; } }

.chat-box {
  position: fixed;
  right: 1.5rem;
  bottom: 6rem;
  z-index: 150;
  width: min(380px, calc(100vw - 2rem));
  height: 520px;
  display: flex;
  flex-direction: column;
  border-radius: var(--radius);
  background: var(--space-deep);
  border: 1px solid var(--space-border);
  box-shadow: var(--shadow);
  overflow: hidden;
}

.chat-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem;
  background: var(--gradient-violet);
}

.chat-avatar { width: 40px; height: 40px; background: rgba(255, 255, 255, 0.2); }
.chat-info { flex: 1; display: flex; flex-direction: column; }
.chat-header .close-btn { position: static; }

.status-dot {
  display: inline-block;
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--mint);
  margin-right: 0.35rem;
}

.status-text { font-size: var(--text-xs); }
.online { color: var(--mint); }

.chat-body {
  flex: 1;
  overflow-y: auto;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.msg { display: flex; gap: 0.5rem; align-items: flex-end; }
.msg.user { flex-direction: row-reverse; }
.msg-avatar { width: 28px; height: 28px; font-size: var(--text-xs); }

.msg-content {
  max-width: 78%;
  padding: 0.65rem 0.9rem;
  border-radius: 14px;
  background: var(--space-panel);
  white-space: pre-wrap;
  font-size: var(--text-sm);
}

.msg.user .msg-content { background: rgba(74, 177, 241, 0.25); }
.msg.bot .msg-content { border: 1px solid var(--space-border); }
.msg-time { display: block; margin-top: 0.25rem; color: var(--text-muted); font-size: 0.65rem; }

.typing .msg-content::after {
  content: '...';
  animation: blink 1s steps(3) infinite;
}

.cursor { animation: blink 1s step-end infinite; }

@keyframes blink { 50% { opacity: 0; } }

.quick-btns {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  padding: 0 1rem 0.75rem;
}

.quick-btns button {
  padding: 0.3rem 0.7rem;
  border-radius: 999px;
  border: 1px solid var(--space-border);
  background: var(--space-panel);
  color: var(--text-secondary);
  font-size: var(--text-xs);
}

.chat-form { padding: 0.75rem 1rem; border-top: 1px solid var(--space-border); }
.powered-by { text-align: center; color: var(--text-muted); font-size: 0.65rem; padding-bottom: 0.5rem; }

/* === 404 === */
.not-found {
  min-height: 60vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  text-align: center;
  padding: 4rem 1.5rem;
}

.not-found-code {
  font-family: var(--font-display);
  font-size: clamp(5rem, 15vw, 9rem);
  font-weight: 800;
  background: var(--gradient-violet);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* === Responsive === */
@media (max-width: 1024px) {
  .hero-container,
  .story-section,
  .contact-content,
  .content-wrapper,
  .case-study { grid-template-columns: 1fr; }

  .hero-visual { display: none; }
  .sidebar-nav { display: none; }
  .footer-top { grid-template-columns: 1fr 1fr; }
}

@media (max-width: 768px) {
  .nav-links,
  .nav-cta { display: none; }
  .hamburger { display: flex; }

  .page-title { font-size: var(--text-2xl); }
  .footer-top,
  .links-grid,
  .info-cards { grid-template-columns: 1fr; }

  .workshop-card.wide { grid-column: auto; }
  .review-item { grid-template-columns: 1fr; gap: 0.25rem; }
  .whatsapp-cta { flex-direction: column; text-align: center; }
  .testimonial-card.prev,
  .testimonial-card.next { opacity: 0; }
}
"#;

#[cfg(test)]
mod tests {
    use super::super::colors;
    use super::GLOBAL_STYLES;

    #[test]
    fn test_stylesheet_declares_brand_palette() {
        for (var, value) in [
            ("--sky", colors::SKY),
            ("--mint", colors::MINT),
            ("--violet", colors::VIOLET),
            ("--whatsapp", colors::WHATSAPP_GREEN),
            ("--space-black", colors::SPACE_BLACK),
        ] {
            assert!(
                GLOBAL_STYLES.contains(&format!("{var}: {value};")),
                "{var} should be {value}"
            );
        }
    }

    #[test]
    fn test_reveal_classes_present() {
        assert!(GLOBAL_STYLES.contains(".reveal.visible"));
        assert!(GLOBAL_STYLES.contains("prefers-reduced-motion"));
    }
}
