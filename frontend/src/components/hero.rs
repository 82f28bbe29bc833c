//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="title">{APP_NAME}</h1>
            <p class="subtitle">
                "Upload a FASTA sequence or a BAM alignment to get its length, "
                "G/C content, reverse complement and read length distribution."
            </p>
        </div>
    }
}
