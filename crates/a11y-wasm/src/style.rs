// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Widget stylesheet and icon markup.

use a11y_core::WidgetConfig;

const STYLESHEET: &str = r#"
body.a11y-readable-font *:not([class*="fa-"]) {
  font-family: Arial,Helvetica,sans-serif !important;
}

.a11y-widget {
  font-size: 16px !important;
  bottom: 15px;
  position: fixed;
  border-radius: 15px;
  border: 0;
  opacity: 0;
  transition: opacity 300ms, transform 300ms;
  background: #d9d9d9;
  height: calc(100% - 10px - 20px);
  max-width: 500px;
  width: 100%;
  @POSITION@: 15px;
  display: none;
  flex-direction: column;
  transform: translateX(-100%);
  z-index: 1000000;
}

.a11y-widget * {
  font-family: Arial,Helvetica,sans-serif !important;
}

.a11y-widget.a11y-open {
  opacity: 1;
  transform: translateY(0);
}

section.a11y-body {
  display: flex;
  flex-direction: column;
  position: relative;
  margin: 1rem;
  padding: .5rem 1rem;
  background: #fff;
  overflow-y: auto;
  flex-grow: 1;
}

section.a11y-hero {
  padding: 1rem;
  text-align: center;
}

h2.a11y-hero-title {
  font-size: 1.2em;
}

footer.a11y-footer {
  background-color: @COLOR@;
  border-bottom-left-radius: 15px;
  border-bottom-right-radius: 15px;
  width: 100%;
}

footer.a11y-footer .a11y-close {
  color: #fff;
  background: #00000045;
  border-bottom-left-radius: 15px;
  width: 32px;
  height: 32px;
  border: 0;
  font-family: Lucida Sans Unicode, Arial Unicode MS;
}

footer.a11y-footer a {
  color: #fff;
  padding: .5rem;
  font-size: 14px;
}

.a11y-open-button {
  background-color: @COLOR@;
  color: #fff;
  width: 32px;
  height: 32px;
  padding: .5rem;
  position: fixed;
  display: flex;
  justify-content: center;
  align-items: center;
  bottom: 15px;
  border-radius: 50%;
  @POSITION@: 15px;
  z-index: 100000;
}

.a11y-actions-box {
  text-align: center;
}

.a11y-actions-group {
  display: flex;
  justify-content: space-between;
  flex-wrap: wrap;
}

.a11y-actions-group .a11y-action-box {
  width: calc(100% / 3 - 1%);
  padding: .75rem;
  margin-bottom: 1rem;
  display: flex;
  justify-content: center;
  align-items: center;
  flex-direction: column;
  background: #f5f5f5;
  border-radius: 1rem;
}

.a11y-actions-group .a11y-action-box.a11y-action-button {
  border: 2px solid transparent;
  cursor: pointer;
  transition: all 300ms ease;
}

.a11y-actions-group .a11y-action-box.a11y-action-button:hover {
  border-color: @COLOR@;
}

.a11y-actions-group .a11y-action-box.a11y-action-button.a11y-active {
  background: @COLOR@;
  color: #fff;
}

.a11y-actions-group .a11y-action-box.a11y-action-box-big {
  width: calc(100% * 2 / 3 - 1%);
}

.a11y-actions-group .a11y-action-box.a11y-action-box-big .a11y-custom-range {
  width: 100%;
}

.a11y-actions-group h3 {
  font-size: 18px;
  margin: 1rem;
}

.a11y-action-box-title {
  font-size: 15px;
}

.a11y-custom-range {
  display: flex;
}

.a11y-custom-range-body {
  flex-grow: 1;
  background: #d9d9d966;
  display: inline-flex;
  justify-content: center;
  align-items: center;
}

.a11y-custom-range-button {
  display: inline-flex;
  justify-content: center;
  align-items: center;
  width: 32px;
  height: 32px;
  background: @COLOR@;
}

@media (max-width:576px) {
  .a11y-widget {
    top: 0;
    left: 0;
    max-width: none;
    height: 100%;
    border-radius: 0;
  }

  .a11y-open-button {
    bottom: 50%;
    @POSITION@: 0;
    transform: translateY(50%);
    border-radius: 0;
  }

  footer.a11y-footer,
  footer.a11y-footer .a11y-close {
    border-radius: 0;
  }

  footer.a11y-footer a {
    font-size: 13px;
  }
}
"#;

/// Stylesheet with the configured accent color and edge filled in.
pub fn stylesheet(config: &WidgetConfig) -> String {
    STYLESHEET
        .replace("@COLOR@", config.color())
        .replace("@POSITION@", config.position().as_str())
}

/// Accessibility figure shown on the open button.
pub const OPEN_ICON: &str = r##"<svg width="100%" height="100%" viewBox="0 0 512 512" aria-hidden="true"><path fill="#fff" d="M496.101 385.669l14.227 28.663c3.929 7.915.697 17.516-7.218 21.445l-65.465 32.886c-16.049 7.967-35.556 1.194-43.189-15.055L331.679 320H192c-15.925 0-29.426-11.71-31.679-27.475C126.433 55.308 128.38 70.044 128 64c0-36.358 30.318-65.635 67.052-63.929 33.271 1.545 60.048 28.905 60.925 62.201.868 32.933-23.152 60.423-54.608 65.039l4.67 32.69H336c8.837 0 16 7.163 16 16v32c0 8.837-7.163 16-16 16H215.182l4.572 32H352a32 32 0 0 1 28.962 18.392L438.477 396.8l36.178-18.349c7.915-3.929 17.517-.697 21.446 7.218zM311.358 352h-24.506c-7.788 54.204-54.528 96-110.852 96-61.757 0-112-50.243-112-112 0-41.505 22.694-77.809 56.324-97.156-3.712-25.965-6.844-47.86-9.488-66.333C45.956 198.464 0 261.963 0 336c0 97.047 78.953 176 176 176 71.87 0 133.806-43.308 161.11-105.192L311.358 352z"/></svg>"##;

/// Chevron pointing down (decrease).
pub const ARROW_DOWN_ICON: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24" aria-hidden="true"><path fill="#fff" d="M6.34317 7.75732L4.92896 9.17154L12 16.2426L19.0711 9.17157L17.6569 7.75735L12 13.4142L6.34317 7.75732Z"/></svg>"##;

/// Chevron pointing up (increase).
pub const ARROW_UP_ICON: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24" aria-hidden="true"><path fill="#fff" d="M17.6569 16.2427L19.0711 14.8285L12.0001 7.75739L4.92896 14.8285L6.34317 16.2427L12.0001 10.5858L17.6569 16.2427Z"/></svg>"##;
