use yew::prelude::*;

/// Indexes visible on a page starting at `start`, wrapping past the end.
pub fn page_window(len: usize, start: usize, per_page: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    (0..per_page.min(len)).map(|offset| (start + offset) % len).collect()
}

pub fn step(len: usize, start: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (start + 1) % len
    } else {
        (start + len - 1) % len
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    #[prop_or(3)]
    pub per_page: usize,
    pub children: Children,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let start = use_state(|| 0usize);
    let slides: Vec<Html> = props.children.iter().collect();
    let len = slides.len();

    let go = |forward: bool| {
        let start = start.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            start.set(step(len, *start, forward));
        })
    };

    let visible = page_window(len, *start % len.max(1), props.per_page);
    let pageable = len > props.per_page;

    html! {
        <div class="carousel">
            if pageable {
                <button class="carousel-prev" onclick={go(false)} aria-label="Previous">{"‹"}</button>
            }
            <div class="carousel-track">
                { for visible.into_iter().map(|index| html! {
                    <div class="carousel-item">{slides[index].clone()}</div>
                }) }
            </div>
            if pageable {
                <button class="carousel-next" onclick={go(true)} aria-label="Next">{"›"}</button>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window_wraps() {
        assert_eq!(page_window(5, 0, 3), vec![0, 1, 2]);
        assert_eq!(page_window(5, 4, 3), vec![4, 0, 1]);
        assert_eq!(page_window(2, 1, 3), vec![1, 0]);
        assert!(page_window(0, 0, 3).is_empty());
    }

    #[test]
    fn test_step_wraps_both_ways() {
        assert_eq!(step(4, 3, true), 0);
        assert_eq!(step(4, 0, false), 3);
        assert_eq!(step(0, 0, true), 0);
    }
}
