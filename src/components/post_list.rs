//! Post index component

use leptos::prelude::*;

use crate::api;

#[component]
pub fn PostList() -> impl IntoView {
    let (posts, set_posts) = signal::<Option<Result<Vec<api::PostSummary>, String>>>(None);

    // fetch the index once on instantiation
    leptos::task::spawn_local(async move {
        let res = api::fetch_post_index().await;
        set_posts.set(Some(res));
    });

    view! {
        <div class="container">
            {move || match posts.get() {
                None => view! {
                    <div class="card">
                        <span class="spinner"></span> " Loading posts..."
                    </div>
                }.into_any(),
                Some(Err(e)) => view! {
                    <div class="result error">
                        <div class="result-label">"Error"</div>
                        <div class="result-value">{e}</div>
                    </div>
                }.into_any(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <div class="card">
                        <p>"Nothing published yet. Check back soon."</p>
                    </div>
                }.into_any(),
                Some(Ok(list)) => view! {
                    <ul class="post-list">
                        {list.into_iter().map(|post| view! {
                            <li class="card">
                                <a href=post.path>
                                    <h2>{post.title}</h2>
                                </a>
                                <span class="post-date">{post.date}</span>
                                <p>{post.summary}</p>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any(),
            }}
        </div>
    }
}
